//! Error types for webhook parsing.

use thiserror::Error;

/// Error returned by [`parse_webhook`](super::parse_webhook).
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The delivery is not JSON, or its resource does not fit the shape
    /// its event type calls for.
    #[error("Failed to decode webhook payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The delivery names an event type this crate does not know.
    ///
    /// Surfaced rather than ignored so that new service event kinds are
    /// noticed.
    #[error("Unknown webhook event type '{0}'")]
    UnknownEventType(String),
}
