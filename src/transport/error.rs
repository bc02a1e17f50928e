//! Error types for the transport layer.

use thiserror::Error;

/// Error type for a failed network exchange.
///
/// Raised by [`HttpClient`](super::HttpClient) implementations and passed
/// through the API client unchanged.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and errors while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The deadline is owned by the transport, not by this crate.
    #[error("Request timed out")]
    Timeout,

    /// The transport refused the URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
