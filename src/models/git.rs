//! Git repository, ref, commit, push and status shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    ChangeCountDictionary, IdentityRef, ReferenceLinks, ResourceRef,
    TeamProjectCollectionReference, TeamProjectReference,
};
use super::enums::{GitObjectType, GitStatusState, VersionControlChangeType};

/// A Git repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepository {
    #[serde(rename = "_links")]
    pub links: Option<ReferenceLinks>,
    pub default_branch: Option<String>,
    pub id: Option<String>,
    pub is_fork: Option<bool>,
    pub name: Option<String>,
    pub parent_repository: Option<GitRepositoryRef>,
    pub project: Option<TeamProjectReference>,
    pub remote_url: Option<String>,
    pub size: Option<u64>,
    pub ssh_url: Option<String>,
    pub url: Option<String>,
    pub valid_remote_urls: Option<Vec<String>>,
}

/// Short reference to a repository, e.g. a fork parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepositoryRef {
    pub collection: Option<TeamProjectCollectionReference>,
    pub id: Option<String>,
    pub is_fork: Option<bool>,
    pub name: Option<String>,
    pub project: Option<TeamProjectReference>,
    pub remote_url: Option<String>,
    pub ssh_url: Option<String>,
    pub url: Option<String>,
}

/// A branch, tag or other ref.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRef {
    #[serde(rename = "_links")]
    pub links: Option<ReferenceLinks>,
    pub creator: Option<IdentityRef>,
    pub is_locked: Option<bool>,
    pub is_locked_by: Option<IdentityRef>,
    pub name: Option<String>,
    pub object_id: Option<String>,
    pub peeled_object_id: Option<String>,
    pub repository: Option<GitRepository>,
    pub statuses: Option<Vec<GitStatus>>,
    pub url: Option<String>,
}

/// The list envelope returned by the refs endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRefList {
    /// Number of refs in `value`
    #[serde(default)]
    pub count: usize,
    /// The refs
    #[serde(default, rename = "value")]
    pub refs: Vec<GitRef>,
}

/// Old and new object ids of one ref touched by a push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRefUpdate {
    pub is_locked: Option<bool>,
    pub name: Option<String>,
    pub new_object_id: Option<String>,
    pub old_object_id: Option<String>,
    pub repository_id: Option<String>,
}

/// Author or committer with a timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitUserDate {
    pub date: Option<DateTime<Utc>>,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Metadata about the content of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContentMetadata {
    pub content_type: Option<String>,
    pub encoding: Option<i32>,
    pub extension: Option<String>,
    pub file_name: Option<String>,
    pub is_binary: Option<bool>,
    pub is_image: Option<bool>,
    pub vs_link: Option<String>,
}

/// A file or folder at a given commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitItem {
    #[serde(rename = "_links")]
    pub links: Option<ReferenceLinks>,
    pub commit_id: Option<String>,
    pub content: Option<String>,
    pub content_metadata: Option<FileContentMetadata>,
    pub git_object_type: Option<GitObjectType>,
    pub is_folder: Option<bool>,
    pub is_sym_link: Option<bool>,
    pub latest_processed_change: Option<Box<GitCommitRef>>,
    pub object_id: Option<String>,
    pub original_object_id: Option<String>,
    pub path: Option<String>,
    pub url: Option<String>,
}

/// Inline content supplied with a change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemContent {
    pub content: Option<String>,
    pub content_type: Option<String>,
}

/// Template used to seed a new file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitTemplate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A change to one item within a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitChange {
    pub change_id: Option<i64>,
    pub change_type: Option<VersionControlChangeType>,
    pub item: Option<GitItem>,
    pub new_content: Option<ItemContent>,
    pub new_content_template: Option<GitTemplate>,
    pub original_path: Option<String>,
    pub source_server_item: Option<String>,
    pub url: Option<String>,
}

/// A commit together with optional change details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitCommitRef {
    #[serde(rename = "_links")]
    pub links: Option<ReferenceLinks>,
    pub author: Option<GitUserDate>,
    pub change_counts: Option<ChangeCountDictionary>,
    pub changes: Option<Vec<GitChange>>,
    pub comment: Option<String>,
    pub comment_truncated: Option<bool>,
    pub commit_id: Option<String>,
    pub committer: Option<GitUserDate>,
    pub parents: Option<Vec<String>>,
    pub push: Option<GitPushRef>,
    pub remote_url: Option<String>,
    pub statuses: Option<Vec<GitStatus>>,
    pub url: Option<String>,
    pub work_items: Option<Vec<ResourceRef>>,
}

/// A push: the commits and ref updates it carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPush {
    #[serde(rename = "_links")]
    pub links: Option<ReferenceLinks>,
    pub commits: Option<Vec<GitCommitRef>>,
    pub date: Option<DateTime<Utc>>,
    pub push_id: Option<i64>,
    pub pushed_by: Option<IdentityRef>,
    pub ref_updates: Option<Vec<GitRefUpdate>>,
    pub repository: Option<GitRepository>,
    pub url: Option<String>,
}

/// Short form of a push embedded in a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPushRef {
    pub date: Option<DateTime<Utc>>,
    pub push_id: Option<i64>,
    pub pushed_by: Option<IdentityRef>,
    pub url: Option<String>,
}

/// Identifies the service that posted a status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitStatusContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A status posted by a service against a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitStatus {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<GitStatusContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<GitStatusState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
}

/// Query options for listing refs.
///
/// Empty or `false` fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRefListOptions {
    /// Only refs whose name starts with this prefix (after the ref type)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,
    /// Include status entries for each ref
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_statuses: bool,
    /// Only the latest status per context
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub latest_statuses_only: bool,
}
