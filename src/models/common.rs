//! Reference types shared across resource areas.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single hyperlink in a `_links` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target of the link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// The `_links` object attached to most resources, keyed by relation name.
pub type ReferenceLinks = BTreeMap<String, Link>;

/// Number of changes per change type, keyed by type name.
pub type ChangeCountDictionary = BTreeMap<String, i64>;

/// A user or group reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    #[serde(rename = "_links")]
    pub links: Option<ReferenceLinks>,
    pub descriptor: Option<String>,
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub image_url: Option<String>,
    pub is_container: Option<bool>,
    pub unique_name: Option<String>,
    pub url: Option<String>,
}

/// A pull request reviewer together with their vote.
///
/// Vote values: 10 approved, 5 approved with suggestions, 0 no vote,
/// -5 waiting for author, -10 rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRefWithVote {
    #[serde(flatten)]
    pub identity: IdentityRef,
    pub has_declined: Option<bool>,
    pub is_flagged: Option<bool>,
    pub is_required: Option<bool>,
    pub reviewer_url: Option<String>,
    pub vote: Option<i32>,
}

/// Reference to a team project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProjectReference {
    pub abbreviation: Option<String>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub last_update_time: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub revision: Option<i64>,
    pub state: Option<String>,
    pub url: Option<String>,
    pub visibility: Option<String>,
}

/// Reference to a project collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProjectCollectionReference {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// Minimal reference to another resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: Option<String>,
    pub url: Option<String>,
}

/// A tag (label) applied to a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebApiTagDefinition {
    pub active: Option<bool>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}
