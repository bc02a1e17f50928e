//! Event discriminators and their typed payloads.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::WebhookError;
use crate::models::{Build, GitPullRequest, GitPush, WorkItem, WorkItemUpdate};

/// Known values of the `eventType` field of a service hook delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    GitPush,
    PullRequestCreated,
    PullRequestUpdated,
    PullRequestMerged,
    BuildComplete,
    WorkItemCreated,
    WorkItemUpdated,
    WorkItemDeleted,
    WorkItemRestored,
    WorkItemCommented,
}

impl EventType {
    /// Every known event type, in table order.
    pub const ALL: &'static [Self] = &[
        Self::GitPush,
        Self::PullRequestCreated,
        Self::PullRequestUpdated,
        Self::PullRequestMerged,
        Self::BuildComplete,
        Self::WorkItemCreated,
        Self::WorkItemUpdated,
        Self::WorkItemDeleted,
        Self::WorkItemRestored,
        Self::WorkItemCommented,
    ];

    /// The wire name, e.g. `git.pullrequest.merged`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitPush => "git.push",
            Self::PullRequestCreated => "git.pullrequest.created",
            Self::PullRequestUpdated => "git.pullrequest.updated",
            Self::PullRequestMerged => "git.pullrequest.merged",
            Self::BuildComplete => "build.complete",
            Self::WorkItemCreated => "workitem.created",
            Self::WorkItemUpdated => "workitem.updated",
            Self::WorkItemDeleted => "workitem.deleted",
            Self::WorkItemRestored => "workitem.restored",
            Self::WorkItemCommented => "workitem.commented",
        }
    }

    /// Looks up a wire name. Matching is exact.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = WebhookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| WebhookError::UnknownEventType(s.to_string()))
    }
}

/// The `resource` of a delivery, decoded into the shape its event type
/// calls for.
///
/// Pull request events share [`GitPullRequest`]; work item events other
/// than `workitem.updated` carry the full [`WorkItem`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    GitPush(Box<GitPush>),
    PullRequestCreated(Box<GitPullRequest>),
    PullRequestUpdated(Box<GitPullRequest>),
    PullRequestMerged(Box<GitPullRequest>),
    BuildComplete(Box<Build>),
    WorkItemCreated(Box<WorkItem>),
    WorkItemUpdated(Box<WorkItemUpdate>),
    WorkItemDeleted(Box<WorkItem>),
    WorkItemRestored(Box<WorkItem>),
    WorkItemCommented(Box<WorkItem>),
}

impl EventPayload {
    /// Decodes `resource` as the payload of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Decode`] when `resource` does not fit.
    pub fn decode(kind: EventType, resource: &Value) -> Result<Self, WebhookError> {
        Ok(match kind {
            EventType::GitPush => Self::GitPush(boxed(resource)?),
            EventType::PullRequestCreated => Self::PullRequestCreated(boxed(resource)?),
            EventType::PullRequestUpdated => Self::PullRequestUpdated(boxed(resource)?),
            EventType::PullRequestMerged => Self::PullRequestMerged(boxed(resource)?),
            EventType::BuildComplete => Self::BuildComplete(boxed(resource)?),
            EventType::WorkItemCreated => Self::WorkItemCreated(boxed(resource)?),
            EventType::WorkItemUpdated => Self::WorkItemUpdated(boxed(resource)?),
            EventType::WorkItemDeleted => Self::WorkItemDeleted(boxed(resource)?),
            EventType::WorkItemRestored => Self::WorkItemRestored(boxed(resource)?),
            EventType::WorkItemCommented => Self::WorkItemCommented(boxed(resource)?),
        })
    }

    /// The event type this payload was decoded for.
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::GitPush(_) => EventType::GitPush,
            Self::PullRequestCreated(_) => EventType::PullRequestCreated,
            Self::PullRequestUpdated(_) => EventType::PullRequestUpdated,
            Self::PullRequestMerged(_) => EventType::PullRequestMerged,
            Self::BuildComplete(_) => EventType::BuildComplete,
            Self::WorkItemCreated(_) => EventType::WorkItemCreated,
            Self::WorkItemUpdated(_) => EventType::WorkItemUpdated,
            Self::WorkItemDeleted(_) => EventType::WorkItemDeleted,
            Self::WorkItemRestored(_) => EventType::WorkItemRestored,
            Self::WorkItemCommented(_) => EventType::WorkItemCommented,
        }
    }

    /// Returns the pull request for any pull request event.
    #[must_use]
    pub fn pull_request(&self) -> Option<&GitPullRequest> {
        match self {
            Self::PullRequestCreated(pr)
            | Self::PullRequestUpdated(pr)
            | Self::PullRequestMerged(pr) => Some(pr),
            _ => None,
        }
    }

    /// Returns the work item for created, deleted, restored and commented events.
    #[must_use]
    pub fn work_item(&self) -> Option<&WorkItem> {
        match self {
            Self::WorkItemCreated(item)
            | Self::WorkItemDeleted(item)
            | Self::WorkItemRestored(item)
            | Self::WorkItemCommented(item) => Some(item),
            _ => None,
        }
    }
}

fn boxed<T: DeserializeOwned>(resource: &Value) -> Result<Box<T>, serde_json::Error> {
    T::deserialize(resource).map(Box::new)
}
