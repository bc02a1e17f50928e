//! Closed enumerations used by the REST payloads.
//!
//! The service sends these by name; some older endpoints and tools use the
//! numeric value instead. Both forms decode, names are always emitted, and
//! values outside the known set are rejected rather than guessed.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A name or number that does not belong to the target enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownEnumValue {
    /// Unrecognized wire name.
    #[error("unknown {type_name} name '{value}'")]
    Name {
        /// The enumeration being decoded
        type_name: &'static str,
        /// The rejected name
        value: String,
    },

    /// Unrecognized numeric value.
    #[error("unknown {type_name} value {value}")]
    Index {
        /// The enumeration being decoded
        type_name: &'static str,
        /// The rejected number
        value: i64,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Name(String),
    Index(i64),
}

fn decode<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownEnumValue> + TryFrom<i64, Error = UnknownEnumValue>,
{
    match Repr::deserialize(deserializer)? {
        Repr::Name(name) => name.parse().map_err(D::Error::custom),
        Repr::Index(index) => T::try_from(index).map_err(D::Error::custom),
    }
}

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = ($index:literal, $wire:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the name used on the wire.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }

            /// Returns the numeric value of this variant.
            #[must_use]
            pub const fn value(self) -> i64 {
                match self {
                    $( Self::$variant => $index ),+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = UnknownEnumValue;

            fn try_from(value: i64) -> Result<Self, UnknownEnumValue> {
                match value {
                    $( $index => Ok(Self::$variant), )+
                    _ => Err(UnknownEnumValue::Index {
                        type_name: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    _ => Err(UnknownEnumValue::Name {
                        type_name: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                decode(deserializer)
            }
        }
    };
}

closed_enum! {
    /// Kind of change applied to a version-controlled item.
    VersionControlChangeType {
        None = (0, "none"),
        Add = (1, "add"),
        Edit = (2, "edit"),
        Encoding = (3, "encoding"),
        Rename = (4, "rename"),
        Delete = (5, "delete"),
        Undelete = (6, "undelete"),
        Branch = (7, "branch"),
        Merge = (8, "merge"),
        Lock = (9, "lock"),
        Rollback = (10, "rollback"),
        SourceRename = (11, "sourceRename"),
        TargetRename = (12, "targetRename"),
        Property = (13, "property"),
        All = (14, "all"),
    }
}

closed_enum! {
    /// Git object kind.
    GitObjectType {
        Bad = (0, "bad"),
        Commit = (1, "commit"),
        Tree = (2, "tree"),
        Blob = (3, "blob"),
        Tag = (4, "tag"),
        Ext2 = (5, "ext2"),
        OfsDelta = (6, "ofsDelta"),
        RefDelta = (7, "refDelta"),
    }
}

closed_enum! {
    /// Strategy used to merge a pull request on completion.
    GitPullRequestMergeStrategy {
        NoFastForward = (0, "noFastForward"),
        Rebase = (1, "rebase"),
        RebaseMerge = (2, "rebaseMerge"),
        Squash = (3, "squash"),
    }
}

closed_enum! {
    /// State of a commit or pull request status.
    GitStatusState {
        NotSet = (0, "notSet"),
        Pending = (1, "pending"),
        Succeeded = (2, "succeeded"),
        Failed = (3, "failed"),
        Error = (4, "error"),
        NotApplicable = (5, "notApplicable"),
    }
}

closed_enum! {
    /// Lifecycle status of a pull request.
    PullRequestStatus {
        NotSet = (0, "notSet"),
        Active = (1, "active"),
        Abandoned = (2, "abandoned"),
        Completed = (3, "completed"),
        All = (4, "all"),
    }
}

closed_enum! {
    /// Status of the pull request's merge attempt.
    PullRequestAsyncStatus {
        NotSet = (0, "notSet"),
        Queued = (1, "queued"),
        Conflicts = (2, "conflicts"),
        Succeeded = (3, "succeeded"),
        RejectedByPolicy = (4, "rejectedByPolicy"),
        Failure = (5, "failure"),
    }
}

closed_enum! {
    /// Reason a pull request merge failed.
    PullRequestMergeFailureType {
        None = (0, "none"),
        Unknown = (1, "unknown"),
        CaseSensitive = (2, "caseSensitive"),
        ObjectTooLarge = (3, "objectTooLarge"),
    }
}

closed_enum! {
    /// Execution status of a build.
    BuildStatus {
        None = (0, "none"),
        InProgress = (1, "inProgress"),
        Completed = (2, "completed"),
        Cancelling = (4, "cancelling"),
        Postponed = (8, "postponed"),
        NotStarted = (32, "notStarted"),
        All = (47, "all"),
    }
}

closed_enum! {
    /// Outcome of a completed build.
    BuildResult {
        None = (0, "none"),
        Succeeded = (2, "succeeded"),
        PartiallySucceeded = (4, "partiallySucceeded"),
        Failed = (8, "failed"),
        Canceled = (32, "canceled"),
    }
}
