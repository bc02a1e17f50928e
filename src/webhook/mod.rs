//! Inbound service hook deliveries.
//!
//! This module provides:
//! - The two-pass delivery parser ([`parse_webhook`])
//! - The delivery envelope ([`Event`])
//! - Known event kinds ([`EventType`]) and their typed payloads ([`EventPayload`])
//! - Accessors for the identification headers ([`activity_id`],
//!   [`subscription_id`], [`request_id`])
//!
//! Parsing does not depend on the HTTP client; it only needs the raw body
//! and, for the header accessors, an [`http::HeaderMap`].

mod error;
mod event;
mod headers;
mod payload;


pub use error::WebhookError;
pub use event::{Event, EventMessage, ResourceContainer, parse_webhook};
pub use headers::{
    ACTIVITY_ID, REQUEST_ID, SUBSCRIPTION_ID, activity_id, request_id, subscription_id,
};
pub use payload::{EventPayload, EventType};
