//! Typed REST payloads.
//!
//! Every field the service may omit is an `Option`, so "absent" stays
//! distinct from a zero value. Field names follow the service's camelCase
//! JSON through serde attributes.

mod build;
mod common;
mod enums;
mod git;
mod pull_request;
mod work_item;

#[cfg(test)]
mod enums_tests;

pub use build::{Build, BuildDefinitionReference, BuildRepository};
pub use common::{
    ChangeCountDictionary, IdentityRef, IdentityRefWithVote, Link, ReferenceLinks, ResourceRef,
    TeamProjectCollectionReference, TeamProjectReference, WebApiTagDefinition,
};
pub use enums::{
    BuildResult, BuildStatus, GitObjectType, GitPullRequestMergeStrategy, GitStatusState,
    PullRequestAsyncStatus, PullRequestMergeFailureType, PullRequestStatus, UnknownEnumValue,
    VersionControlChangeType,
};
pub use git::{
    FileContentMetadata, GitChange, GitCommitRef, GitItem, GitPush, GitPushRef, GitRef,
    GitRefList, GitRefListOptions, GitRefUpdate, GitRepository, GitRepositoryRef, GitStatus,
    GitStatusContext, GitTemplate, GitUserDate, ItemContent,
};
pub use pull_request::{
    GitPullRequest, GitPullRequestCompletionOptions, GitPullRequestMergeOptions,
};
pub use work_item::{WorkItem, WorkItemFieldUpdate, WorkItemRelation, WorkItemUpdate};
