//! Build shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{IdentityRef, ReferenceLinks, TeamProjectReference};
use super::enums::{BuildResult, BuildStatus};

/// A build run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(rename = "_links")]
    pub links: Option<ReferenceLinks>,
    pub build_number: Option<String>,
    pub definition: Option<BuildDefinitionReference>,
    pub finish_time: Option<DateTime<Utc>>,
    pub id: Option<i64>,
    pub project: Option<TeamProjectReference>,
    pub queue_time: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    pub repository: Option<BuildRepository>,
    pub requested_by: Option<IdentityRef>,
    pub requested_for: Option<IdentityRef>,
    pub result: Option<BuildResult>,
    pub source_branch: Option<String>,
    pub source_version: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub status: Option<BuildStatus>,
    pub uri: Option<String>,
    pub url: Option<String>,
}

/// The pipeline definition a build ran from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDefinitionReference {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub revision: Option<i64>,
    pub url: Option<String>,
}

/// The source repository of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRepository {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
}
