//! The on-disk configuration document.
//!
//! Responsibilities:
//! - Define `ConfigDocument`, the whole JSON file as one value.
//! - Read and parse the document from disk.
//!
//! Does NOT handle:
//! - Writing the document (handled by `store.rs` via atomic save).
//!
//! Invariants:
//! - Missing keys load as empty maps / empty strings.
//! - Current pointers are not validated on load.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::types::{Role, Server};

/// Root structure of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    /// Server definitions keyed by name.
    pub servers: BTreeMap<String, Server>,
    /// Role definitions keyed by name.
    pub roles: BTreeMap<String, Role>,
    /// Name of the current server, or empty.
    #[serde(rename = "default_server")]
    pub current_server: String,
    /// Name of the current role, or empty.
    #[serde(rename = "default_role")]
    pub current_role: String,
}

/// Reads the document at `path`.
///
/// Returns `Ok(None)` when the file does not exist.
pub(crate) fn read_document(path: &Path) -> Result<Option<ConfigDocument>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
}
