//! Multi-search payload construction.
//!
//! Responsibilities:
//! - Build the query clause from optional free text.
//! - Render the two-line NDJSON body (header + search) for `_msearch`.
//!
//! Invariants:
//! - Payloads are built as JSON values, so user text is always escaped.
//! - The rendered body is exactly two newline-terminated lines.
//! - Field order follows Kibana's own discover request.

use serde_json::{Value, json};

use crate::error::Result;

/// Shard preference sent with every search, as Kibana does for a session.
pub const SEARCH_PREFERENCE: i64 = 1_569_331_617_740;

/// Date histogram bucket interval.
pub const HISTOGRAM_INTERVAL: &str = "3h";

const HIGHLIGHT_PRE_TAG: &str = "@kibana-highlighted-field@";
const HIGHLIGHT_POST_TAG: &str = "@/kibana-highlighted-field@";

/// Builds the query clause.
///
/// Free text becomes a `query_string` clause over all fields; no text (or
/// empty text) matches everything.
pub fn build_clause(query: Option<&str>) -> Value {
    match query.filter(|text| !text.is_empty()) {
        Some(text) => json!({
            "query_string": {
                "query": text,
                "analyze_wildcard": true,
                "default_field": "*"
            }
        }),
        None => json!({ "match_all": {} }),
    }
}

/// Parameters of one `_msearch` request.
#[derive(Debug, Clone)]
pub struct SearchPayload {
    /// Index pattern to search.
    pub index: String,
    /// Maximum number of hits.
    pub size: u32,
    /// Date field used for sorting and the time range.
    pub window_filter: String,
    /// UTC offset for the histogram, e.g. `+02:00`.
    pub time_zone: String,
    /// Clause from [`build_clause`].
    pub clause: Value,
    /// Lower bound of the window (epoch millis).
    pub newer: i64,
    /// Upper bound of the window (epoch millis).
    pub older: i64,
}

impl SearchPayload {
    /// The header line naming the index.
    pub fn header(&self) -> Value {
        json!({
            "index": self.index,
            "ignore_unavailable": true,
            "preference": SEARCH_PREFERENCE
        })
    }

    /// The search body line.
    pub fn body(&self) -> Value {
        let field = self.window_filter.as_str();
        json!({
            "version": true,
            "size": self.size,
            "sort": [
                { field: { "order": "desc", "unmapped_type": "boolean" } }
            ],
            "_source": { "excludes": [] },
            "aggs": {
                "2": {
                    "date_histogram": {
                        "field": field,
                        "interval": HISTOGRAM_INTERVAL,
                        "time_zone": self.time_zone,
                        "min_doc_count": 1
                    }
                }
            },
            "stored_fields": ["*"],
            "script_fields": {},
            "query": {
                "bool": {
                    "must": [
                        self.clause,
                        {
                            "range": {
                                field: {
                                    "gte": self.newer,
                                    "lte": self.older,
                                    "format": "epoch_millis"
                                }
                            }
                        }
                    ],
                    "filter": [],
                    "should": [],
                    "must_not": []
                }
            },
            "highlight": {
                "pre_tags": [HIGHLIGHT_PRE_TAG],
                "post_tags": [HIGHLIGHT_POST_TAG],
                "fields": { "*": {} },
                "fragment_size": 2147483647
            },
            "timeout": "30000ms"
        })
    }

    /// Renders the newline-delimited request body.
    pub fn to_ndjson(&self) -> Result<String> {
        let header = serde_json::to_string(&self.header())?;
        let body = serde_json::to_string(&self.body())?;
        Ok(format!("{header}\n{body}\n"))
    }
}
