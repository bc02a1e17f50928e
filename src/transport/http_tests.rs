//! Tests for HTTP request/response types.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn url(s: &str) -> url::Url {
    url::Url::parse(s).unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let target = url("https://dev.azure.com/contoso/web/_apis/projects");
        let req = HttpRequest::new(http::Method::PATCH, target.clone());

        assert_eq!(req.method, http::Method::PATCH);
        assert_eq!(req.url, target);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn with_body_sets_body() {
        let body = br#"{"state":"succeeded"}"#.to_vec();
        let req = HttpRequest::new(http::Method::POST, url("https://dev.azure.com/"))
            .with_body(body.clone());

        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn with_header_replaces_existing_value() {
        let req = HttpRequest::new(http::Method::GET, url("https://dev.azure.com/"))
            .with_header(
                http::header::USER_AGENT,
                http::HeaderValue::from_static("first"),
            )
            .with_header(
                http::header::USER_AGENT,
                http::HeaderValue::from_static("second"),
            );

        assert_eq!(
            req.headers.get_all(http::header::USER_AGENT).iter().count(),
            1
        );
        assert_eq!(req.header_str(&http::header::USER_AGENT), Some("second"));
    }

    #[test]
    fn header_str_returns_none_when_missing() {
        let req = HttpRequest::new(http::Method::GET, url("https://dev.azure.com/"));

        assert!(req.header_str(&http::header::CONTENT_TYPE).is_none());
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_ok_accepts_only_200() {
        let ok = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), vec![]);
        assert!(ok.is_ok());

        for status in [
            http::StatusCode::CREATED,
            http::StatusCode::NO_CONTENT,
            http::StatusCode::MOVED_PERMANENTLY,
            http::StatusCode::TOO_MANY_REQUESTS,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(!resp.is_ok(), "Expected {status} to be rejected");
        }
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"{\"count\":0}".to_vec(),
        );

        assert_eq!(resp.body_text(), Some("{\"count\":0}"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xFF, 0xFE],
        );

        assert!(resp.body_text().is_none());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let source = std::io::Error::other("connection refused");
        let error = HttpError::Connection(Box::new(source));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("connection refused")
        );
    }

    #[test]
    fn timeout_displays_message() {
        let error = HttpError::Timeout;

        assert_eq!(error.to_string(), "Request timed out");
        assert!(error.source().is_none());
    }

    #[test]
    fn invalid_url_displays_message() {
        let error = HttpError::InvalidUrl("missing host".to_string());

        assert!(error.to_string().contains("Invalid URL"));
        assert!(error.to_string().contains("missing host"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;

    struct FixedClient {
        response: HttpResponse,
    }

    impl HttpClient for FixedClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(self.response.clone())
        }
    }

    struct TimeoutClient;

    impl HttpClient for TimeoutClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Err(HttpError::Timeout)
        }
    }

    #[tokio::test]
    async fn fixed_client_returns_configured_response() {
        let client = FixedClient {
            response: HttpResponse::new(
                http::StatusCode::OK,
                http::HeaderMap::new(),
                b"{}".to_vec(),
            ),
        };

        let result = client
            .request(HttpRequest::new(http::Method::GET, url("https://dev.azure.com/")))
            .await
            .unwrap();

        assert!(result.is_ok());
        assert_eq!(result.body, b"{}".to_vec());
    }

    #[tokio::test]
    async fn timeout_client_returns_timeout_error() {
        let result = TimeoutClient
            .request(HttpRequest::new(http::Method::GET, url("https://dev.azure.com/")))
            .await;

        assert!(matches!(result, Err(HttpError::Timeout)));
    }
}
