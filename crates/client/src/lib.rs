//! Kibana multi-search client.
//!
//! This crate renders `_msearch` payloads from a role and a time window,
//! sends them through a swappable HTTP transport, and decodes the matching
//! documents from the response.

pub mod error;
pub mod models;
pub mod msearch;
pub mod period;
pub mod query;
pub mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use error::{ClientError, Result};
pub use msearch::{MsearchClient, msearch_url};
pub use period::{local_time_zone, now_millis, resolve_period};
pub use query::{SearchPayload, build_clause};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
