//! Request construction.

use http::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use serde::Serialize;

use super::{Client, ClientError, ConfigError};
use crate::transport::HttpRequest;

const API_VERSION_PARAM: &str = "api-version";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Body argument for calls that carry no JSON body.
const NO_BODY: Option<&()> = None;

impl<H> Client<H> {
    /// Builds a request that carries no body.
    ///
    /// # Errors
    ///
    /// See [`Client::build_request`].
    pub fn build_bodyless(
        &self,
        method: http::Method,
        path: &str,
    ) -> Result<HttpRequest, ClientError> {
        self.build_request(method, path, NO_BODY)
    }

    /// Builds a request for `path`, relative to the configured project.
    ///
    /// The project segment is escaped and prepended to `path`, and the
    /// configured API version is added unless `path` already names one.
    /// When `body` is given it is JSON-encoded and `Content-Type` is set.
    /// No credentials are attached here; [`Client::execute`] does that.
    ///
    /// `path` should not start with `/`. A leading slash or a scheme-looking
    /// prefix is resolved under the project. Dot segments that climb above
    /// the project are rejected.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Configuration`] if the base URL lacks a trailing
    ///   slash
    /// - [`ClientError::InvalidUrl`] if `path` cannot be resolved
    /// - [`ClientError::OutsideProject`] if `path` resolves above the project
    /// - [`ClientError::Serialization`] if `body` cannot be encoded
    pub fn build_request<T: Serialize + ?Sized>(
        &self,
        method: http::Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<HttpRequest, ClientError> {
        let url = self.resolve(path)?;
        let mut request = HttpRequest::new(method, url);

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(ClientError::Serialization)?;
            request = request
                .with_body(encoded)
                .with_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        if let Some(agent) = self.config.user_agent_header() {
            request = request.with_header(USER_AGENT, agent.clone());
        }

        Ok(request)
    }

    fn resolve(&self, path: &str) -> Result<url::Url, ClientError> {
        let base = self.config.base_url();
        if !base.path().ends_with('/') {
            return Err(ConfigError::MissingTrailingSlash(base.to_string()).into());
        }

        let mut scoped = base.clone();
        scoped
            .path_segments_mut()
            .map_err(|()| ConfigError::InvalidBaseUrl {
                url: base.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push(self.config.project())
            .push("");

        // "./" keeps "/x" and "https://..." relative to the project; dot
        // segments still resolve, so the result is checked below.
        let mut url = scoped
            .join(&format!("./{path}"))
            .map_err(|source| ClientError::InvalidUrl {
                path: path.to_string(),
                source,
            })?;

        if !url.path().starts_with(scoped.path()) {
            return Err(ClientError::OutsideProject {
                path: path.to_string(),
                resolved: url.path().to_string(),
            });
        }

        if !url.query_pairs().any(|(key, _)| key == API_VERSION_PARAM) {
            url.query_pairs_mut()
                .append_pair(API_VERSION_PARAM, self.config.api_version());
        }

        Ok(url)
    }
}
