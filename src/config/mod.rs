//! Configuration layer for the `azdo` command-line client.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated settings ([`ValidatedSettings`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** (the token may also come from `AZDO_TOKEN`)
//! 2. **TOML config file** from `--config`, or `<config_dir>/azdo/azdo.toml`
//!    when that file exists
//! 3. **Built-in defaults** for host, API version and user agent
//!
//! Account, project and token have no defaults. An empty value counts as
//! missing.
//!
//! The user agent is TOML-only.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, StatusStateArg};
pub use error::{SettingsError, field};
pub use toml::{ConnectionSection, TomlConfig, default_config_template};
pub use validated::{ValidatedSettings, write_default_config};
