//! The delivery envelope and the two-pass parser.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{EventPayload, EventType, WebhookError};

/// Rendered text of an event in the formats the service provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMessage {
    pub text: Option<String>,
    pub html: Option<String>,
    pub markdown: Option<String>,
}

/// A container (collection, account, project) the resource belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContainer {
    pub id: Option<String>,
    pub base_url: Option<String>,
}

/// A decoded service hook delivery.
///
/// The envelope fields are always decoded. `resource` keeps the raw
/// event-specific document and `payload` holds its typed form when the
/// delivery names a known event type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Matches the `X-VSS-SubscriptionId` header of the delivery
    pub subscription_id: Option<String>,
    pub notification_id: Option<i64>,
    pub id: Option<String>,
    /// Raw discriminator, e.g. `git.push`
    pub event_type: Option<String>,
    pub publisher_id: Option<String>,
    pub scope: Option<String>,
    pub message: Option<EventMessage>,
    pub detailed_message: Option<EventMessage>,
    #[serde(default)]
    pub resource: Value,
    pub resource_version: Option<String>,
    pub resource_containers: Option<BTreeMap<String, ResourceContainer>>,
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub payload: Option<EventPayload>,
}

impl Event {
    /// The typed event kind, if a payload was decoded.
    #[must_use]
    pub fn kind(&self) -> Option<EventType> {
        self.payload.as_ref().map(EventPayload::event_type)
    }
}

/// Parses a raw service hook delivery.
///
/// The envelope is decoded first with `resource` kept as raw JSON. A
/// missing or empty `eventType` yields the envelope alone. A known
/// `eventType` selects the shape `resource` is then decoded into.
///
/// # Example
///
/// ```
/// use azdo::webhook::{EventType, parse_webhook};
///
/// let raw = br#"{"eventType":"git.push","resource":{"pushId":14}}"#;
/// let event = parse_webhook(raw).unwrap();
///
/// assert_eq!(event.kind(), Some(EventType::GitPush));
/// ```
///
/// # Errors
///
/// - [`WebhookError::Decode`] if `raw` is not a JSON envelope or the
///   resource does not fit its event type
/// - [`WebhookError::UnknownEventType`] if `eventType` is not recognized
pub fn parse_webhook(raw: &[u8]) -> Result<Event, WebhookError> {
    let mut event: Event = serde_json::from_slice(raw)?;

    let Some(name) = event.event_type.as_deref().filter(|name| !name.is_empty()) else {
        tracing::debug!(id = ?event.id, "Webhook delivery without event type");
        return Ok(event);
    };

    let kind: EventType = name.parse()?;
    event.payload = Some(EventPayload::decode(kind, &event.resource)?);
    tracing::debug!(id = ?event.id, event_type = %kind, "Decoded webhook delivery");

    Ok(event)
}
