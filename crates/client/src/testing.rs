//! Test doubles for the HTTP transport.
//!
//! Available to other crates through the `test-utils` feature.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{ClientError, Result};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// A transport that records requests and replays queued responses.
///
/// Executing with an empty queue fails with `ConnectionRefused`.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose first request is answered with `response`.
    pub fn with_response(response: HttpResponse) -> Self {
        let transport = Self::new();
        transport.push_response(response);
        transport
    }

    /// Queue a response.
    pub fn push_response(&self, response: HttpResponse) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: ClientError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    /// Requests executed so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ClientError::ConnectionRefused(url)))
    }
}
