//! `_msearch` execution against Kibana's Elasticsearch proxy.
//!
//! Responsibilities:
//! - Build the request URL and headers for a configured server.
//! - Execute the request through an [`HttpTransport`].
//! - Validate content type and status, then decode matching documents.
//!
//! Does NOT handle:
//! - Choosing the server or role (see CLI `search` command).
//! - Printing results.
//!
//! Invariants:
//! - Exactly one request per search; no retries.
//! - Content type is checked before status, so a non-JSON body always fails
//!   with `UnexpectedContentType`.
//! - Results are all-or-nothing: any decoding failure returns no documents.

use kishell_config::Server;
use reqwest::Method;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::models::{extract_sources, parse_body};
use crate::query::SearchPayload;
use crate::transport::{HttpResponse, HttpTransport};

/// Path of the multi-search endpoint behind Kibana.
pub const MSEARCH_PATH: &str = "/elasticsearch/_msearch";

/// Content type of the request body.
pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Header carrying the Kibana version, required by Kibana's XSRF check.
pub const KIBANA_VERSION_HEADER: &str = "kbn-version";

const JSON_MEDIA_TYPE: &str = "application/json";

/// Full `_msearch` URL for a server.
pub fn msearch_url(server: &Server) -> String {
    format!("{}{}", server.base_url(), MSEARCH_PATH)
}

/// Issues multi-search requests through a transport.
#[derive(Debug, Clone)]
pub struct MsearchClient<T> {
    transport: T,
}

impl<T: HttpTransport> MsearchClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one search and returns the `_source` of every hit.
    pub async fn search(&self, server: &Server, payload: &SearchPayload) -> Result<Vec<Value>> {
        let url = msearch_url(server);
        let body = payload.to_ndjson()?;

        info!(%url, index = %payload.index, size = payload.size, "Executing search");

        let mut request = self
            .transport
            .new_request(Method::POST, &url, body)?
            .header("Content-Type", NDJSON_CONTENT_TYPE)
            .header(KIBANA_VERSION_HEADER, server.kibana_version.as_str());
        if server.has_basic_auth() {
            request = request.header(
                "Authorization",
                format!("Basic {}", server.basic_auth.expose_secret()),
            );
        }

        let response = self.transport.execute(request).await?;
        let documents = read_response(&response, &url, &payload.index)?;

        debug!(hits = documents.len(), "Search completed");
        Ok(documents)
    }
}

/// Validates a response and decodes its documents.
pub fn read_response(response: &HttpResponse, url: &str, index: &str) -> Result<Vec<Value>> {
    let media_type = response
        .content_type
        .as_deref()
        .map(media_type)
        .unwrap_or_default();

    if !media_type.eq_ignore_ascii_case(JSON_MEDIA_TYPE) {
        return Err(ClientError::UnexpectedContentType {
            content_type: media_type.to_string(),
            status: response.status,
        });
    }

    if response.status >= 400 {
        return Err(ClientError::ApiError {
            status: response.status,
            url: url.to_string(),
            message: response.text(),
        });
    }

    extract_sources(parse_body(&response.body)?, index)
}

/// The media type of a `Content-Type` value, without parameters.
fn media_type(content_type: &str) -> &str {
    content_type.split(';').next().unwrap_or_default().trim()
}
