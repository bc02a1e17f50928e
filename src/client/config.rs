//! Immutable client configuration.

use std::fmt;

use http::HeaderValue;
use secrecy::SecretString;
use url::Url;

use super::error::{ConfigError, field};

/// Connection settings shared read-only by every API call.
///
/// Host and API version live here rather than in globals, so clients for
/// different organizations or API versions can coexist in one process.
///
/// # Example
///
/// ```
/// use azdo::client::ClientConfig;
///
/// let config = ClientConfig::new("contoso", "Fabrikam Web", "pat")
///     .unwrap()
///     .with_user_agent("azdo-example/1.0")
///     .unwrap();
///
/// assert_eq!(config.base_url().as_str(), "https://dev.azure.com/contoso/");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    account: String,
    project: String,
    token: SecretString,
    user_agent: Option<HeaderValue>,
    api_version: String,
}

impl ClientConfig {
    /// Default Azure DevOps Services host.
    pub const DEFAULT_HOST: &'static str = "https://dev.azure.com";

    /// Default REST API version sent with every request.
    pub const DEFAULT_API_VERSION: &'static str = "5.1-preview.1";

    /// Creates a configuration for `https://dev.azure.com/<account>/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when account, project or token
    /// is empty.
    pub fn new(
        account: impl Into<String>,
        project: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let account = account.into();
        let project = project.into();
        let token = token.into();

        if account.is_empty() {
            return Err(ConfigError::MissingField {
                field: field::ACCOUNT,
            });
        }
        if project.is_empty() {
            return Err(ConfigError::MissingField {
                field: field::PROJECT,
            });
        }
        if token.is_empty() {
            return Err(ConfigError::MissingField {
                field: field::TOKEN,
            });
        }

        let base_url = account_base_url(Self::DEFAULT_HOST, &account)?;

        Ok(Self {
            base_url,
            account,
            project,
            token: SecretString::from(token),
            user_agent: None,
            api_version: Self::DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Points the configuration at another host, keeping the account segment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `host` is not an absolute
    /// hierarchical URL.
    pub fn with_host(mut self, host: &str) -> Result<Self, ConfigError> {
        self.base_url = account_base_url(host, &self.account)?;
        Ok(self)
    }

    /// Replaces the base URL verbatim.
    ///
    /// Useful for on-premises collections whose layout differs from
    /// `<host>/<account>/`. The trailing-slash requirement is checked when
    /// a request is built.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the `User-Agent` header value. An empty string disables it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUserAgent`] if the value cannot be sent
    /// as a header (control characters, non-ASCII).
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, ConfigError> {
        self.user_agent = if user_agent.is_empty() {
            None
        } else {
            let value =
                HeaderValue::from_str(user_agent).map_err(|e| ConfigError::InvalidUserAgent {
                    value: user_agent.to_string(),
                    reason: e.to_string(),
                })?;
            Some(value)
        };
        Ok(self)
    }

    /// Sets the REST API version appended to requests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if `api_version` is blank.
    pub fn with_api_version(
        mut self,
        api_version: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_version = api_version.into();
        if api_version.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: field::API_VERSION,
            });
        }
        self.api_version = api_version;
        Ok(self)
    }

    /// Returns the base URL (host + account, trailing slash).
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the organization/account name.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns the default project every request is scoped to.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the configured user agent, if any.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_ref().and_then(|value| value.to_str().ok())
    }

    /// Returns the REST API version.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub(crate) const fn token(&self) -> &SecretString {
        &self.token
    }

    pub(crate) const fn user_agent_header(&self) -> Option<&HeaderValue> {
        self.user_agent.as_ref()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("account", &self.account)
            .field("project", &self.project)
            .field("token", &"[REDACTED]")
            .field("user_agent", &self.user_agent())
            .field("api_version", &self.api_version)
            .finish()
    }
}

fn account_base_url(host: &str, account: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
        url: host.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(host).map_err(|e| invalid(&e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot be a base"))?
        .pop_if_empty()
        .push(account)
        .push("");

    Ok(url)
}
