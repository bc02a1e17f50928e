//! Authenticated request plumbing for the Azure DevOps REST API.
//!
//! This module provides:
//! - Immutable connection settings ([`ClientConfig`])
//! - The API client ([`Client`]) with request building and execution
//! - Query-string encoding of option structs ([`add_options`])
//! - Error types ([`ClientError`], [`ConfigError`], [`QueryError`])
//!
//! # Request lifecycle
//!
//! A resource proxy (for example [`GitService`](crate::git::GitService))
//! formats a path relative to the project, optionally runs it through
//! [`add_options`], asks [`Client::build_request`] for an [`HttpRequest`]
//! and hands it to [`Client::execute`], which authenticates, sends and
//! decodes it.

mod config;
mod error;
mod executor;
mod query;
mod request;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod query_tests;

pub use config::ClientConfig;
pub use error::{ClientError, ConfigError, QueryError, field};
pub use query::add_options;

use crate::git::GitService;
use crate::transport::ReqwestClient;

/// Azure DevOps API client.
///
/// Owns the immutable [`ClientConfig`] and a transport. Every call builds a
/// fresh request, so a single client can be shared across tasks.
///
/// # Type Parameters
///
/// - `H`: The transport implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use azdo::client::{Client, ClientConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(ClientConfig::new("contoso", "web", "my-pat")?);
/// let repo = client.git().get_repository("web").await?;
/// println!("{:?}", repo.default_branch);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<H = ReqwestClient> {
    config: ClientConfig,
    http: H,
}

impl Client<ReqwestClient> {
    /// Creates a client using the default reqwest transport.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestClient::new())
    }

    /// Validates the credentials and creates a client against `dev.azure.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when any input is empty.
    pub fn from_credentials(
        account: impl Into<String>,
        project: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::new(account, project, token)?))
    }
}

impl<H> Client<H> {
    /// Creates a client with a custom transport.
    #[must_use]
    pub const fn with_transport(config: ClientConfig, http: H) -> Self {
        Self { config, http }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.http
    }

    /// Returns the Git resource proxy.
    #[must_use]
    pub const fn git(&self) -> GitService<'_, H> {
        GitService::new(self)
    }
}
