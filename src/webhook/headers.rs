//! Accessors for the identification headers sent with service hook deliveries.

use http::HeaderMap;

/// The `X-VSS-ActivityId` header.
pub const ACTIVITY_ID: &str = "X-VSS-ActivityId";
/// The `X-VSS-SubscriptionId` header.
pub const SUBSCRIPTION_ID: &str = "X-VSS-SubscriptionId";
/// The `Request-Id` header.
pub const REQUEST_ID: &str = "Request-Id";

/// Activity id of the delivery, or `""` when absent.
#[must_use]
pub fn activity_id(headers: &HeaderMap) -> &str {
    header_or_empty(headers, ACTIVITY_ID)
}

/// Id of the subscription that produced the delivery, or `""` when absent.
#[must_use]
pub fn subscription_id(headers: &HeaderMap) -> &str {
    header_or_empty(headers, SUBSCRIPTION_ID)
}

/// Unique id of the delivery, or `""` when absent.
#[must_use]
pub fn request_id(headers: &HeaderMap) -> &str {
    header_or_empty(headers, REQUEST_ID)
}

/// Raw header value. Names match case-insensitively; values are returned
/// as sent, including non-ASCII UTF-8. Bytes that are not UTF-8 read as `""`.
fn header_or_empty<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
        .unwrap_or_default()
}
