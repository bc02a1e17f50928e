//! Shared mock transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that replays a queue of responses and records requests.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// A single response with the given status and body.
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        Self::new(vec![Ok(response(status, body))])
    }

    /// A single transport failure.
    pub fn failing(error: HttpError) -> Arc<Self> {
        Self::new(vec![Err(error)])
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock ran out of responses")
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

/// Builds a buffered response.
pub fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.as_bytes().to_vec(),
    )
}
