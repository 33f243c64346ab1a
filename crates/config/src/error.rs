//! Error types for configuration loading and persistence.
//!
//! Responsibilities:
//! - Define error variants for config file I/O, parsing, and lookups.
//! - Carry the offending path or name for every failure.
//!
//! Invariants:
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading, querying, or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("kishell is not configured. Use configure option before searching")]
    NotConfigured,

    #[error("server '{0}' is invalid")]
    ServerNotFound(String),

    #[error("role '{0}' is invalid")]
    RoleNotFound(String),

    #[error("Unable to determine home directory for the config file")]
    HomeDirUnavailable,

    #[error("Failed to parse .env file at line {error_index}")]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind:?}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file")]
    DotenvUnknown,
}

impl ConfigError {
    /// Whether this error is a failed name lookup.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::ServerNotFound(_) | Self::RoleNotFound(_))
    }
}
