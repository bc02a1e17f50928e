//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::SettingsError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Connection settings
    #[serde(default)]
    pub connection: ConnectionSection,
}

/// Connection configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionSection {
    /// Organization (account) name
    pub account: Option<String>,

    /// Default project
    pub project: Option<String>,

    /// Personal access token (prefer the `AZDO_TOKEN` environment variable)
    pub token: Option<String>,

    /// Service host
    pub host: Option<String>,

    /// REST API version
    pub api_version: Option<String>,

    /// `User-Agent` header value; empty disables the header
    pub user_agent: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(SettingsError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# azdo configuration file
#
# Command-line flags override these values.

[connection]
# Organization (account) name (required)
# account = "contoso"

# Project every request is scoped to (required)
# project = "Fabrikam-Fiber-Git"

# Personal access token (required)
# Prefer the AZDO_TOKEN environment variable over storing it here.
# token = ""

# Service host (default: https://dev.azure.com)
# host = "https://dev.azure.com"

# REST API version (default: 5.1-preview.1)
# api_version = "5.1-preview.1"

# User-Agent header (default: azdo/<version>, empty disables it)
# user_agent = "azdo"
"#
    .to_string()
}
