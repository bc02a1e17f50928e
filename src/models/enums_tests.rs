//! Tests for closed enumerations.

use std::str::FromStr;

use super::enums::{
    BuildResult, GitObjectType, GitPullRequestMergeStrategy, GitStatusState, UnknownEnumValue,
    VersionControlChangeType,
};

mod names {
    use super::*;

    #[test]
    fn as_str_matches_wire_names() {
        assert_eq!(VersionControlChangeType::SourceRename.as_str(), "sourceRename");
        assert_eq!(GitObjectType::OfsDelta.as_str(), "ofsDelta");
        assert_eq!(GitStatusState::NotApplicable.as_str(), "notApplicable");
        assert_eq!(
            GitPullRequestMergeStrategy::RebaseMerge.to_string(),
            "rebaseMerge"
        );
    }

    #[test]
    fn from_str_accepts_every_wire_name() {
        for state in GitStatusState::ALL {
            assert_eq!(GitStatusState::from_str(state.as_str()), Ok(*state));
        }
        for kind in VersionControlChangeType::ALL {
            assert_eq!(kind.as_str().parse::<VersionControlChangeType>(), Ok(*kind));
        }
    }

    #[test]
    fn from_str_rejects_unknown_name() {
        let result = "exploded".parse::<GitStatusState>();

        assert_eq!(
            result,
            Err(UnknownEnumValue::Name {
                type_name: "GitStatusState",
                value: "exploded".to_string(),
            })
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Succeeded".parse::<GitStatusState>().is_err());
    }
}

mod values {
    use super::*;

    #[test]
    fn try_from_maps_known_values() {
        assert_eq!(GitObjectType::try_from(3), Ok(GitObjectType::Blob));
        assert_eq!(
            VersionControlChangeType::try_from(14),
            Ok(VersionControlChangeType::All)
        );
        assert_eq!(BuildResult::try_from(32), Ok(BuildResult::Canceled));
    }

    #[test]
    fn try_from_rejects_out_of_range_values() {
        assert_eq!(
            GitObjectType::try_from(8),
            Err(UnknownEnumValue::Index {
                type_name: "GitObjectType",
                value: 8,
            })
        );
        assert!(GitStatusState::try_from(-1).is_err());
    }

    #[test]
    fn try_from_rejects_gaps_in_sparse_enums() {
        assert!(BuildResult::try_from(1).is_err());
        assert!(BuildResult::try_from(3).is_err());
    }

    #[test]
    fn value_round_trips_through_try_from() {
        for strategy in GitPullRequestMergeStrategy::ALL {
            assert_eq!(
                GitPullRequestMergeStrategy::try_from(strategy.value()),
                Ok(*strategy)
            );
        }
    }
}

mod serde_format {
    use super::*;

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&GitStatusState::Succeeded).unwrap();

        assert_eq!(json, r#""succeeded""#);
    }

    #[test]
    fn deserializes_from_name_or_number() {
        let by_name: GitObjectType = serde_json::from_str(r#""commit""#).unwrap();
        let by_number: GitObjectType = serde_json::from_str("1").unwrap();

        assert_eq!(by_name, GitObjectType::Commit);
        assert_eq!(by_number, GitObjectType::Commit);
    }

    #[test]
    fn deserialize_reports_unknown_value() {
        let err = serde_json::from_str::<GitStatusState>("42").unwrap_err();

        assert!(err.to_string().contains("unknown GitStatusState value 42"));
    }
}
