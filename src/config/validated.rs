//! Validated settings after merging CLI and TOML sources.
//!
//! This module contains the final, validated settings used by the
//! command-line client. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::client::ClientConfig;

use super::cli::Cli;
use super::defaults;
use super::error::{SettingsError, field};
use super::toml::TomlConfig;

/// Fully validated settings ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedSettings::from_raw`] to create from CLI args and optional
/// TOML config, or [`ValidatedSettings::load`] to also locate and read the
/// config file.
#[derive(Debug)]
pub struct ValidatedSettings {
    /// Client configuration (credentials, host, API version)
    pub client: ClientConfig,

    /// Config file the values were merged from, if any
    pub source: Option<PathBuf>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source_str = self
            .source
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Settings {{ base_url: {}, project: {}, api_version: {}, user_agent: {}, config: {} }}",
            self.client.base_url(),
            self.client.project(),
            self.client.api_version(),
            self.client.user_agent().unwrap_or("none"),
            source_str,
        )
    }
}

impl ValidatedSettings {
    /// Creates validated settings from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, which take
    /// precedence over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Account, project or token is missing or empty
    /// - The host is not a usable base URL
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, SettingsError> {
        let connection = toml.map(|t| &t.connection);

        let account = required(
            cli.account.as_deref(),
            connection.and_then(|c| c.account.as_deref()),
            field::ACCOUNT,
            "Use --account or set connection.account in config file",
        )?;
        let project = required(
            cli.project.as_deref(),
            connection.and_then(|c| c.project.as_deref()),
            field::PROJECT,
            "Use --project or set connection.project in config file",
        )?;
        let token = required(
            cli.token.as_deref(),
            connection.and_then(|c| c.token.as_deref()),
            field::TOKEN,
            "Use --token, set AZDO_TOKEN, or set connection.token in config file",
        )?;

        // Priority: CLI explicit > TOML > default
        let host = cli
            .host
            .as_deref()
            .or_else(|| connection.and_then(|c| c.host.as_deref()))
            .unwrap_or(defaults::HOST);

        let api_version = cli
            .api_version
            .as_deref()
            .or_else(|| connection.and_then(|c| c.api_version.as_deref()))
            .unwrap_or(defaults::API_VERSION);

        let user_agent = connection
            .and_then(|c| c.user_agent.as_deref())
            .unwrap_or(defaults::USER_AGENT);

        let client = ClientConfig::new(account, project, token)?
            .with_host(host)?
            .with_api_version(api_version)?
            .with_user_agent(user_agent)?;

        Ok(Self {
            client,
            source: None,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges settings from CLI and the config file.
    ///
    /// Reads `cli.config` when given. Otherwise `<config_dir>/azdo/azdo.toml`
    /// is used if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged settings are invalid
    pub fn load(cli: &Cli) -> Result<Self, SettingsError> {
        Self::load_with_default(cli, defaults::config_path().as_deref())
    }

    /// Like [`ValidatedSettings::load`], with an explicit fallback path.
    ///
    /// # Errors
    ///
    /// See [`ValidatedSettings::load`].
    pub fn load_with_default(
        cli: &Cli,
        default_path: Option<&Path>,
    ) -> Result<Self, SettingsError> {
        let path = resolve_config_path(cli, default_path);
        let toml = path.as_deref().map(TomlConfig::load).transpose()?;

        let mut settings = Self::from_raw(cli, toml.as_ref())?;
        settings.source = path;
        Ok(settings)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), SettingsError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| SettingsError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn resolve_config_path(cli: &Cli, default_path: Option<&Path>) -> Option<PathBuf> {
    // An explicit path must exist; the default is only used when present
    if let Some(ref path) = cli.config {
        return Some(path.clone());
    }

    default_path.filter(|p| p.is_file()).map(Path::to_path_buf)
}

fn required<'a>(
    cli: Option<&'a str>,
    toml: Option<&'a str>,
    name: &'static str,
    hint: &'static str,
) -> Result<&'a str, SettingsError> {
    let non_empty = |value: &&str| !value.is_empty();
    cli.filter(non_empty)
        .or_else(|| toml.filter(non_empty))
        .ok_or_else(|| SettingsError::missing(name, hint))
}
