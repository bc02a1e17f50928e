//! Tests for `add_options`.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::{QueryError, add_options};

#[derive(Debug, Default, Serialize)]
struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    a: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    b: String,
}

fn opts(a: u32) -> ListOptions {
    ListOptions {
        a: Some(a),
        b: String::new(),
    }
}

mod encoding {
    use super::*;

    #[test]
    fn none_returns_path_unchanged() {
        let path = add_options::<ListOptions>("_apis/x?y=1#frag", None).unwrap();

        assert_eq!(path, "_apis/x?y=1#frag");
    }

    #[test]
    fn set_field_is_added_and_empty_field_omitted() {
        let path = add_options("_apis/x", Some(&opts(1))).unwrap();

        assert_eq!(path, "_apis/x?a=1");
    }

    #[test]
    fn all_empty_options_leave_path_unchanged() {
        let path = add_options("_apis/x", Some(&ListOptions::default())).unwrap();

        assert_eq!(path, "_apis/x");
    }

    #[test]
    fn existing_parameter_wins() {
        let path = add_options("_apis/x?a=2", Some(&opts(1))).unwrap();

        assert_eq!(path, "_apis/x?a=2");
    }

    #[test]
    fn existing_and_option_parameters_merge_sorted() {
        let path = add_options("_apis/x?z=last", Some(&opts(1))).unwrap();

        assert_eq!(path, "_apis/x?a=1&z=last");
    }

    #[test]
    fn fragment_is_preserved() {
        let path = add_options("_apis/x#top", Some(&opts(3))).unwrap();

        assert_eq!(path, "_apis/x?a=3#top");
    }

    #[test]
    fn values_are_form_encoded() {
        #[derive(Serialize)]
        struct Search {
            filter: String,
        }

        let path = add_options(
            "_apis/refs",
            Some(&Search {
                filter: "heads/feature x&y".to_string(),
            }),
        )
        .unwrap();

        assert_eq!(path, "_apis/refs?filter=heads%2Ffeature+x%26y");
    }

    #[test]
    fn arrays_become_repeated_keys() {
        #[derive(Serialize)]
        struct Ids {
            ids: Vec<u32>,
        }

        let path = add_options("_apis/wit", Some(&Ids { ids: vec![3, 1] })).unwrap();

        assert_eq!(path, "_apis/wit?ids=3&ids=1");
    }

    #[test]
    fn booleans_and_nulls_render_as_strings() {
        #[derive(Serialize)]
        struct Flags {
            include: bool,
            cursor: Option<String>,
        }

        let path = add_options(
            "_apis/x",
            Some(&Flags {
                include: true,
                cursor: None,
            }),
        )
        .unwrap();

        assert_eq!(path, "_apis/x?cursor=&include=true");
    }

    #[test]
    fn maps_are_accepted() {
        let mut options = BTreeMap::new();
        options.insert("$top", "5");

        let path = add_options("_apis/x", Some(&options)).unwrap();

        assert_eq!(path, "_apis/x?%24top=5");
    }
}

mod errors {
    use super::*;

    #[test]
    fn nested_object_is_unsupported() {
        #[derive(Serialize)]
        struct Nested {
            inner: ListOptions,
        }

        let err = add_options(
            "_apis/x",
            Some(&Nested {
                inner: ListOptions::default(),
            }),
        )
        .unwrap_err();

        assert!(matches!(err, QueryError::Unsupported(_)));
    }

    #[test]
    fn scalar_options_are_unsupported() {
        let err = add_options("_apis/x", Some(&42)).unwrap_err();

        assert!(matches!(err, QueryError::Unsupported(_)));
    }

    #[test]
    fn unserializable_options_are_serialize_error() {
        let mut options = HashMap::new();
        options.insert((1, 2), "x");

        let err = add_options("_apis/x", Some(&options)).unwrap_err();

        assert!(matches!(err, QueryError::Serialize(_)));
    }

    #[test]
    fn control_characters_are_invalid_path() {
        let err = add_options("_apis/x\n", Some(&opts(1))).unwrap_err();

        assert!(matches!(err, QueryError::InvalidPath { .. }));
    }

    #[test]
    fn bad_percent_escape_is_invalid_path() {
        let err = add_options("_apis/%zz", Some(&opts(1))).unwrap_err();

        assert!(matches!(err, QueryError::InvalidPath { .. }));
    }

    #[test]
    fn truncated_percent_escape_is_invalid_path() {
        let err = add_options("_apis/x%2", Some(&opts(1))).unwrap_err();

        assert!(matches!(err, QueryError::InvalidPath { .. }));
    }
}
