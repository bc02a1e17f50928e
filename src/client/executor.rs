//! Request execution: authentication, sending and response decoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::header::{AUTHORIZATION, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Client, ClientError, ConfigError};
use crate::transport::{HttpClient, HttpRequest};

impl<H: HttpClient> Client<H> {
    /// Authenticates and sends `request`, decoding a `200 OK` body as `T`.
    ///
    /// Credentials are applied here, immediately before sending, as HTTP
    /// Basic auth with an empty user name and the token as password.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if the exchange fails (connection,
    ///   timeout, cancellation), passed through unchanged
    /// - [`ClientError::UnexpectedStatus`] for any status other than 200
    /// - [`ClientError::Decode`] if a 200 body is not valid JSON for `T`
    /// - [`ClientError::Configuration`] if the token cannot form a header
    pub async fn execute<T: DeserializeOwned>(
        &self,
        mut request: HttpRequest,
    ) -> Result<T, ClientError> {
        request
            .headers
            .insert(AUTHORIZATION, self.basic_auth_header()?);

        let url = request.url.to_string();
        tracing::debug!(method = %request.method, %url, "Sending request");

        let response = self.http.request(request).await?;
        tracing::trace!(status = response.status.as_u16(), %url, "Received response");

        if !response.is_ok() {
            tracing::debug!(
                status = response.status.as_u16(),
                body = response.body_text().unwrap_or_default(),
                "Request rejected"
            );
            return Err(ClientError::UnexpectedStatus {
                url,
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| ClientError::Decode { url, source })
    }

    /// Builds and executes a request in one step.
    ///
    /// # Errors
    ///
    /// Any error from [`Client::build_request`] or [`Client::execute`].
    pub async fn send<B, T>(
        &self,
        method: http::Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(method, path, body)?;
        self.execute(request).await
    }

    fn basic_auth_header(&self) -> Result<HeaderValue, ClientError> {
        let credentials = STANDARD.encode(format!(":{}", self.config.token().expose_secret()));
        let mut value = HeaderValue::try_from(format!("Basic {credentials}"))
            .map_err(|_| ConfigError::InvalidCredential)?;
        value.set_sensitive(true);
        Ok(value)
    }
}
