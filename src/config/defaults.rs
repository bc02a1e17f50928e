//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

use std::path::PathBuf;

use crate::client::ClientConfig;

/// Default service host.
pub const HOST: &str = ClientConfig::DEFAULT_HOST;

/// Default REST API version.
pub const API_VERSION: &str = ClientConfig::DEFAULT_API_VERSION;

/// User agent sent by the command-line client.
pub const USER_AGENT: &str = concat!("azdo/", env!("CARGO_PKG_VERSION"));

/// Directory under the platform config dir that holds the config file.
pub const CONFIG_DIR_NAME: &str = "azdo";

/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "azdo.toml";

/// Returns `<config_dir>/azdo/azdo.toml`, if the platform has a config dir.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
