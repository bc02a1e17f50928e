//! Query-string encoding of option structs.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use super::QueryError;

type Params = BTreeMap<String, Vec<String>>;

/// Adds the fields of `options` to `path` as query parameters.
///
/// `options` must serialize to a flat struct or map. Each field's serde name
/// becomes the parameter name; mark fields with `skip_serializing_if` to
/// drop them when empty. Parameters already present in `path` take
/// precedence over same-named fields of `options`. Keys come out sorted.
///
/// # Example
///
/// ```
/// use azdo::client::add_options;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Paging {
///     #[serde(rename = "$top")]
///     top: u32,
///     #[serde(skip_serializing_if = "String::is_empty")]
///     filter: String,
/// }
///
/// let paging = Paging { top: 10, filter: String::new() };
/// let path = add_options("_apis/git/repositories", Some(&paging)).unwrap();
/// assert_eq!(path, "_apis/git/repositories?%24top=10");
/// ```
///
/// # Errors
///
/// - [`QueryError::InvalidPath`] if `path` has control characters or bad
///   percent escapes
/// - [`QueryError::Serialize`] if `options` fails to serialize
/// - [`QueryError::Unsupported`] if `options` is not a flat record
pub fn add_options<T: Serialize + ?Sized>(
    path: &str,
    options: Option<&T>,
) -> Result<String, QueryError> {
    let Some(options) = options else {
        return Ok(path.to_string());
    };

    validate_path(path)?;

    let mut params = option_params(options)?;
    let (before_fragment, fragment) = match path.split_once('#') {
        Some((head, tail)) => (head, Some(tail)),
        None => (path, None),
    };
    let (base, existing) = before_fragment
        .split_once('?')
        .unwrap_or((before_fragment, ""));

    let mut from_path = Params::new();
    for (key, value) in form_urlencoded::parse(existing.as_bytes()) {
        from_path
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params.extend(from_path);

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(
            params
                .iter()
                .flat_map(|(key, values)| values.iter().map(move |value| (key, value))),
        )
        .finish();

    let mut out = base.to_string();
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    Ok(out)
}

fn option_params<T: Serialize + ?Sized>(options: &T) -> Result<Params, QueryError> {
    let fields = match serde_json::to_value(options).map_err(QueryError::Serialize)? {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Params::new()),
        other => {
            return Err(QueryError::Unsupported(format!(
                "expected a struct or map, got {}",
                kind(&other)
            )));
        }
    };

    let mut params = Params::new();
    for (key, value) in fields {
        let values = match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| scalar(&key, item))
                .collect::<Result<Vec<_>, _>>()?,
            other => vec![scalar(&key, other)?],
        };
        params.insert(key, values);
    }
    Ok(params)
}

fn scalar(key: &str, value: Value) -> Result<String, QueryError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s),
        other => Err(QueryError::Unsupported(format!(
            "field '{key}' is {}",
            kind(&other)
        ))),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn validate_path(path: &str) -> Result<(), QueryError> {
    let invalid = |reason| QueryError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if path.chars().any(char::is_control) {
        return Err(invalid("contains control characters"));
    }

    let bytes = path.as_bytes();
    for (i, _) in path.match_indices('%') {
        let escape = bytes.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(invalid("invalid percent escape"));
        }
    }

    Ok(())
}
