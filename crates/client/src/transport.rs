//! Swappable HTTP transport.
//!
//! Responsibilities:
//! - Define `HttpRequest`/`HttpResponse`, plain values that test doubles can build.
//! - Define the `HttpTransport` trait: build a request, execute a request.
//! - Provide `ReqwestTransport`, the production implementation.
//!
//! Does NOT handle:
//! - Search semantics, headers, or response validation (see `msearch`).
//! - Retries or redirect policy beyond reqwest's defaults.
//!
//! Invariants:
//! - `ReqwestTransport` applies a fixed timeout (5 seconds unless overridden).
//! - Transport failures are classified into `Timeout`, `ConnectionRefused`, or `HttpError`.

use std::time::Duration;

use kishell_config::constants::DEFAULT_TIMEOUT_SECS;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::{ClientError, Result};

/// An outgoing HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Headers in insertion order.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// Create a request without headers.
    pub fn new(method: Method, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First value of a header, matched case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A fully read HTTP response.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw `Content-Type` header value, if present.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// The body decoded as UTF-8, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Builds and executes HTTP requests.
///
/// Implemented by [`ReqwestTransport`] for real traffic and by
/// `testing::MockTransport` in tests.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Create a request for `url`.
    ///
    /// # Errors
    /// Returns `InvalidUrl` if `url` does not parse.
    fn new_request(&self, method: Method, url: &str, body: String) -> Result<HttpRequest> {
        reqwest::Url::parse(url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(HttpRequest::new(method, url, body))
    }

    /// Send the request and read the whole response.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`HttpTransport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport with the default 5 second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a transport with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, err: reqwest::Error, url: &str) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else if err.is_connect() {
            ClientError::ConnectionRefused(url.to_string())
        } else {
            ClientError::HttpError(err)
        }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        debug!(%method, %url, bytes = body.len(), "Sending request");

        let mut builder = self.client.request(method, &url).body(body);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(|e| self.classify(e, &url))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify(e, &url))?
            .to_vec();

        debug!(status, content_type = ?content_type, bytes = body.len(), "Received response");

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
