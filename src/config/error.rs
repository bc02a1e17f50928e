//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::client::ConfigError;

/// Error type for command-line settings.
///
/// Covers errors from file operations, parsing and validation.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// The merged values were rejected by the client.
    #[error("Invalid client settings: {0}")]
    Client(#[from] ConfigError),
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The organization/account name.
    pub const ACCOUNT: &str = "account";
    /// The project name.
    pub const PROJECT: &str = "project";
    /// The personal access token.
    pub const TOKEN: &str = "token";
}

impl SettingsError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
