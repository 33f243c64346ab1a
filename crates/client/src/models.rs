//! Typed decoding of `_msearch` responses.
//!
//! The response is an object whose array values hold one sub-response per
//! search: `{ "responses": [ { "hits": { "hits": [ { "_source": {...} } ] } } ] }`.
//! Decoding fails with `InvalidResponse` on an unexpected shape instead of
//! panicking.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ClientError, Result};

/// One sub-response of a multi-search.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Option<HitsEnvelope>,
    /// Present when this individual search failed.
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub status: Option<u16>,
}

/// The `hits` object of a sub-response.
#[derive(Debug, Deserialize)]
pub struct HitsEnvelope {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// A single matching document.
#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "_index", default)]
    pub index: Option<String>,
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
}

/// Decodes a response body into its top-level object.
pub fn parse_body(body: &[u8]) -> Result<Map<String, Value>> {
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("expected a JSON object: {e}")))
}

/// Collects every `_source` document, in response order.
///
/// Non-array top-level values (such as `took`) are skipped. A sub-response
/// carrying an `error` fails the whole search.
pub fn extract_sources(payload: Map<String, Value>, index: &str) -> Result<Vec<Value>> {
    let mut documents = Vec::new();

    for (key, value) in payload {
        if !value.is_array() {
            debug!(key = %key, "Skipping non-array response field");
            continue;
        }

        let responses: Vec<SearchResponse> = serde_json::from_value(value)
            .map_err(|e| ClientError::InvalidResponse(format!("field '{key}': {e}")))?;

        for response in responses {
            if let Some(error) = response.error {
                return Err(ClientError::SearchFailed {
                    index: index.to_string(),
                    reason: error_reason(&error, response.status),
                });
            }

            let hits = response
                .hits
                .ok_or_else(|| ClientError::InvalidResponse(format!("field '{key}': missing hits")))?;

            for hit in hits.hits {
                match hit.source {
                    Some(source) => documents.push(source),
                    None => debug!(index = ?hit.index, "Skipping hit without _source"),
                }
            }
        }
    }

    Ok(documents)
}

/// Best human-readable reason from an Elasticsearch error object.
fn error_reason(error: &Value, status: Option<u16>) -> String {
    let reason = error
        .pointer("/root_cause/0/reason")
        .or_else(|| error.get("reason"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string());

    match status {
        Some(status) => format!("{reason} (status {status})"),
        None => reason,
    }
}
