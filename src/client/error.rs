//! Error types for client construction, request building and execution.

use thiserror::Error;

use crate::transport::HttpError;

/// Invalid client configuration.
///
/// Raised before any network activity and never worth retrying.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required construction input was empty.
    #[error("Missing valid {field} in client configuration")]
    MissingField {
        /// Name of the empty field
        field: &'static str,
    },

    /// The host or base URL could not be used as a base for relative paths.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The base URL path does not end in `/`.
    #[error("Base URL must have a trailing slash, but '{0}' does not")]
    MissingTrailingSlash(String),

    /// The configured user agent is not a valid header value.
    #[error("Invalid user agent '{value}': {reason}")]
    InvalidUserAgent {
        /// The rejected user agent
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The token cannot be carried in an `Authorization` header.
    #[error("Personal access token cannot be encoded as a header value")]
    InvalidCredential,
}

/// Well-known field names for [`ConfigError::MissingField`].
pub mod field {
    /// The organization/account segment.
    pub const ACCOUNT: &str = "account";
    /// The default project segment.
    pub const PROJECT: &str = "project";
    /// The personal access token.
    pub const TOKEN: &str = "token";
    /// The REST API version.
    pub const API_VERSION: &str = "api version";
}

/// Error type for query-string encoding.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The path cannot be interpreted as a URL reference.
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath {
        /// The rejected path
        path: String,
        /// Reason for invalidity
        reason: &'static str,
    },

    /// The options value could not be serialized.
    #[error("Failed to serialize query options: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The options value has a shape that has no query-string form.
    #[error("Unsupported query option value: {0}")]
    Unsupported(String),
}

/// Error type for API calls made through the client.
///
/// Each variant names a distinct failure stage so callers can tell a bad
/// configuration from a network failure from a rejected or garbled response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid client configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The relative path could not be resolved against the base URL.
    #[error("Cannot resolve '{path}' against the base URL: {source}")]
    InvalidUrl {
        /// The relative path as given
        path: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The relative path climbs above the project with dot segments.
    #[error("Path '{path}' resolves to '{resolved}', outside the project")]
    OutsideProject {
        /// The relative path as given
        path: String,
        /// The path it resolved to
        resolved: String,
    },

    /// A value placed in a path segment would not name a single resource.
    #[error("Invalid path segment '{0}'")]
    InvalidSegment(String),

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body as JSON: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Query options could not be encoded.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The network exchange itself failed.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with something other than `200 OK`.
    #[error("Request to {url} responded with status {}", .status.as_u16())]
    UnexpectedStatus {
        /// The request URL
        url: String,
        /// The status received
        status: http::StatusCode,
    },

    /// The server answered `200 OK` but the body did not decode.
    #[error("Decoding json response from {url} failed: {source}")]
    Decode {
        /// The request URL
        url: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}
