//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::models::GitStatusState;

/// azdo: Azure DevOps command-line client
///
/// Queries Git refs and repositories, posts commit statuses and decodes
/// service hook deliveries.
#[derive(Debug, Parser)]
#[command(name = "azdo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Organization (account) name
    #[arg(long, global = true)]
    pub account: Option<String>,

    /// Project every request is scoped to
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// Personal access token
    #[arg(long, global = true, env = "AZDO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Service host, e.g. an on-premises collection URL
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// REST API version
    #[arg(long = "api-version", global = true)]
    pub api_version: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for azdo
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "azdo.toml")]
        output: PathBuf,
    },

    /// List the refs of a repository
    Refs {
        /// Repository name or id
        repo: String,

        /// Ref namespace to list
        #[arg(long = "type", default_value = "heads")]
        ref_type: String,

        /// Only refs starting with this prefix
        #[arg(long)]
        filter: Option<String>,

        /// Include commit statuses for each ref
        #[arg(long)]
        include_statuses: bool,

        /// Only the latest status per context
        #[arg(long)]
        latest_statuses_only: bool,
    },

    /// Show a repository
    Repo {
        /// Repository name or id
        name: String,
    },

    /// Post a status against a commit
    Status {
        /// Repository name or id
        repo: String,

        /// Commit id
        commit: String,

        /// Status state
        #[arg(long, value_enum)]
        state: StatusStateArg,

        /// Name of the status context
        #[arg(long = "context-name")]
        context_name: String,

        /// Genre of the status context
        #[arg(long = "context-genre")]
        context_genre: Option<String>,

        /// Human-readable description
        #[arg(long)]
        description: Option<String>,

        /// Link shown with the status
        #[arg(long = "target-url")]
        target_url: Option<String>,
    },

    /// Decode a service hook delivery from a file or stdin (`-`)
    Webhook {
        /// Delivery body to read
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}

impl Command {
    /// Returns true if the command talks to the service.
    #[must_use]
    pub const fn needs_connection(&self) -> bool {
        matches!(
            self,
            Self::Refs { .. } | Self::Repo { .. } | Self::Status { .. }
        )
    }
}

/// Commit status state argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusStateArg {
    #[value(name = "pending")]
    Pending,
    #[value(name = "succeeded")]
    Succeeded,
    #[value(name = "failed")]
    Failed,
    #[value(name = "error")]
    Error,
    #[value(name = "not-applicable")]
    NotApplicable,
}

impl From<StatusStateArg> for GitStatusState {
    fn from(arg: StatusStateArg) -> Self {
        match arg {
            StatusStateArg::Pending => Self::Pending,
            StatusStateArg::Succeeded => Self::Succeeded,
            StatusStateArg::Failed => Self::Failed,
            StatusStateArg::Error => Self::Error,
            StatusStateArg::NotApplicable => Self::NotApplicable,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
