//! Pull request shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    IdentityRef, IdentityRefWithVote, ReferenceLinks, ResourceRef, WebApiTagDefinition,
};
use super::enums::{
    GitPullRequestMergeStrategy, PullRequestAsyncStatus, PullRequestMergeFailureType,
    PullRequestStatus,
};
use super::git::{GitCommitRef, GitRef, GitRepository};

/// A pull request with everything the service reports about it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequest {
    #[serde(rename = "_links")]
    pub links: Option<ReferenceLinks>,
    pub artifact_id: Option<String>,
    pub auto_complete_set_by: Option<IdentityRef>,
    pub closed_by: Option<IdentityRef>,
    pub closed_date: Option<DateTime<Utc>>,
    pub code_review_id: Option<i64>,
    pub commits: Option<Vec<GitCommitRef>>,
    pub completion_options: Option<GitPullRequestCompletionOptions>,
    pub completion_queue_time: Option<DateTime<Utc>>,
    pub created_by: Option<IdentityRef>,
    pub creation_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub fork_source: Option<GitRef>,
    pub is_draft: Option<bool>,
    pub labels: Option<Vec<WebApiTagDefinition>>,
    pub last_merge_commit: Option<GitCommitRef>,
    pub last_merge_source_commit: Option<GitCommitRef>,
    pub last_merge_target_commit: Option<GitCommitRef>,
    pub merge_failure_message: Option<String>,
    pub merge_failure_type: Option<PullRequestMergeFailureType>,
    pub merge_id: Option<String>,
    pub merge_options: Option<GitPullRequestMergeOptions>,
    pub merge_status: Option<PullRequestAsyncStatus>,
    pub pull_request_id: Option<i64>,
    pub remote_url: Option<String>,
    pub repository: Option<GitRepository>,
    pub reviewers: Option<Vec<IdentityRefWithVote>>,
    pub source_ref_name: Option<String>,
    pub status: Option<PullRequestStatus>,
    pub supports_iterations: Option<bool>,
    pub target_ref_name: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub work_item_refs: Option<Vec<ResourceRef>>,
}

/// How a pull request should be completed.
///
/// `squash_merge` is deprecated: when `merge_strategy` is set it wins,
/// otherwise `squash_merge = true` means squash and `false` no-fast-forward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GitPullRequestCompletionOptions {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bypass_policy: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bypass_reason: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub delete_source_branch: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub merge_commit_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_strategy: Option<GitPullRequestMergeStrategy>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub squash_merge: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub transition_work_items: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub triggered_by_auto_complete: bool,
}

impl GitPullRequestCompletionOptions {
    /// Resolves the strategy the service will apply.
    #[must_use]
    pub const fn effective_merge_strategy(&self) -> GitPullRequestMergeStrategy {
        match self.merge_strategy {
            Some(strategy) => strategy,
            None if self.squash_merge => GitPullRequestMergeStrategy::Squash,
            None => GitPullRequestMergeStrategy::NoFastForward,
        }
    }
}

/// Options used when the service creates a merge commit for a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequestMergeOptions {
    pub detect_rename_false_positives: Option<bool>,
    pub disable_renames: Option<bool>,
}
