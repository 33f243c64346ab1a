//! Configuration persistence.
//!
//! Responsibilities:
//! - Resolve the configuration file path.
//! - Read the whole document on load and rewrite it on every save.
//! - Manage server/role entries and the current pointers.
//!
//! Does NOT handle:
//! - Loading environment variables (see `env.rs`).
//! - Direct HTTP communication (see `crates/client`).
//!
//! Invariants:
//! - The document is persisted wholesale; there is no partial update path.
//! - A missing file is an empty configuration, never an error.
//! - Concurrent writers are not coordinated; the last writer wins.

mod document;
mod path;
mod store;

pub use document::ConfigDocument;
pub use path::{default_config_path, resolve_config_path};
pub use store::ConfigStore;
