//! Work item shapes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{IdentityRef, ReferenceLinks};

/// A work item and its field values keyed by reference name
/// (for example `System.Title`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    #[serde(rename = "_links")]
    pub links: Option<ReferenceLinks>,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
    pub id: Option<i64>,
    pub relations: Option<Vec<WorkItemRelation>>,
    pub rev: Option<i64>,
    pub url: Option<String>,
}

impl WorkItem {
    /// Returns a field value as a string, if present and a string.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Returns `System.Title`.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.field_str("System.Title")
    }
}

/// A link from a work item to another resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkItemRelation {
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    pub rel: Option<String>,
    pub url: Option<String>,
}

/// Before and after value of one field in an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemFieldUpdate {
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

/// A single revision of a work item, as delivered by `workitem.updated`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemUpdate {
    #[serde(rename = "_links")]
    pub links: Option<ReferenceLinks>,
    #[serde(default)]
    pub fields: BTreeMap<String, WorkItemFieldUpdate>,
    pub id: Option<i64>,
    pub rev: Option<i64>,
    pub revised_by: Option<IdentityRef>,
    pub revised_date: Option<DateTime<Utc>>,
    pub revision: Option<WorkItem>,
    pub url: Option<String>,
    pub work_item_id: Option<i64>,
}
