//! Error types for the kishell client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while building or executing a search.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A period expression such as `30m` could not be parsed.
    #[error("Invalid period '{input}': {reason}")]
    InvalidPeriod { input: String, reason: String },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response was not `application/json`.
    #[error("invalid content type: {content_type} (status {status})")]
    UnexpectedContentType { content_type: String, status: u16 },

    /// API error response (status >= 400).
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// A search inside the multi-search request failed.
    #[error("Search on '{index}' failed: {reason}")]
    SearchFailed { index: String, reason: String },

    /// Invalid response format.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Failed to render a request payload.
    #[error("Failed to serialize request: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether this error came from the transport rather than the server.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::Timeout(_) | Self::ConnectionRefused(_)
        )
    }

    /// Whether this error reflects a response the client could not accept.
    pub fn is_response_error(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedContentType { .. }
                | Self::InvalidResponse(_)
                | Self::SearchFailed { .. }
        )
    }
}
