//! Common test utilities for integration tests.
//!
//! This module provides shared helpers and re-exports commonly used types
//! for testing the kishell client against a `wiremock` server.
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use kishell_client::{ClientError, MsearchClient, ReqwestTransport, SearchPayload};
#[allow(unused_imports)]
pub use kishell_config::Server;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use kishell_client::build_clause;
use kishell_config::basic_auth_token;

/// A plain-http server definition pointing at the mock server.
#[allow(dead_code)]
pub fn server_for(mock_server: &MockServer, credentials: (&str, &str)) -> Server {
    let address = mock_server.address();
    Server {
        hostname: address.ip().to_string(),
        protocol: "http".to_string(),
        port: address.port().to_string(),
        kibana_version: "7.10.2".to_string(),
        basic_auth: basic_auth_token(credentials.0, credentials.1),
    }
}

/// A payload over `logs-*` with a fixed window.
#[allow(dead_code)]
pub fn payload(query: Option<&str>) -> SearchPayload {
    SearchPayload {
        index: "logs-*".to_string(),
        size: 50,
        window_filter: "@timestamp".to_string(),
        time_zone: "Z".to_string(),
        clause: build_clause(query),
        newer: 1_000,
        older: 2_000,
    }
}
