//! Centralized constants for the kishell workspace.
//!
//! Default values shared across crates live here to avoid magic string
//! duplication between the config, client, and CLI crates.

// =============================================================================
// Config File Location
// =============================================================================

/// File name of the configuration document inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".kishell";

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "KISHELL_CONFIG_PATH";

/// Environment variable disabling `.env` loading (set to `1` or `true`).
pub const DOTENV_DISABLED_ENV: &str = "DOTENV_DISABLED";

// =============================================================================
// Connection Defaults
// =============================================================================

/// Port used for `https` servers without an explicit port.
pub const DEFAULT_HTTPS_PORT: &str = "443";

/// Port used for `http` (or unknown protocol) servers without an explicit port.
pub const DEFAULT_HTTP_PORT: &str = "80";

/// HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// Search Defaults
// =============================================================================

/// Default upper bound of the search window.
pub const DEFAULT_OLDER: &str = "now";

/// Default lower bound of the search window (last 15 minutes).
pub const DEFAULT_NEWER: &str = "15m";

/// Default maximum number of documents fetched per search.
pub const DEFAULT_LIMIT: u32 = 50;
