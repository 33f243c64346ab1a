//! Shared test utilities for kishell integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point every command at a config file inside a temp dir.
//! - Seed config files that target a `wiremock` server.
//!
//! Invariants / Assumptions:
//! - No test reads or writes the real `~/.kishell`.

use assert_cmd::Command;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp dir holding the config file used by one test.
pub struct TestConfig {
    _dir: TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl TestConfig {
    /// A config path with no file behind it yet.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".kishell");
        Self { _dir: dir, path }
    }

    /// A config file with the given document.
    pub fn with_document(document: &Value) -> Self {
        let config = Self::empty();
        std::fs::write(&config.path, document.to_string()).unwrap();
        config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved document, parsed.
    pub fn read(&self) -> Value {
        let content = std::fs::read_to_string(&self.path).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    /// A hermetic `kishell` command bound to this config file.
    pub fn cmd(&self) -> Command {
        let mut cmd = kishell_cmd();
        cmd.arg("--config-path").arg(&self.path);
        cmd
    }
}

/// Returns a hermetic `kishell` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Host config and logging env vars are cleared.
pub fn kishell_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("kishell");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("KISHELL_CONFIG_PATH").env_remove("RUST_LOG");

    cmd
}

/// A document with one plain-http server at `host:port` and one role.
#[allow(dead_code)]
pub fn document_for(host: &str, port: u16, basic_auth: &str) -> Value {
    json!({
        "servers": {
            "local": {
                "hostname": host,
                "protocol": "http",
                "port": port.to_string(),
                "kibana_version": "7.10.2",
                "basic_auth": basic_auth
            }
        },
        "roles": {
            "app": { "index": "logs-*", "window_filter": "@timestamp" }
        },
        "default_server": "local",
        "default_role": "app"
    })
}

/// A document targeting a running mock server.
#[allow(dead_code)]
pub fn document_for_mock(server: &wiremock::MockServer, basic_auth: &str) -> Value {
    let address = server.address();
    document_for(&address.ip().to_string(), address.port(), basic_auth)
}
