//! Configuration management for kishell.
//!
//! This crate provides the server/role types and the file-backed store that
//! remembers connection details and query defaults between invocations.

pub mod constants;
mod env;
pub mod error;
pub mod persistence;
pub mod types;

pub use env::{env_var_or_none, load_dotenv};
pub use error::{ConfigError, Result};
pub use persistence::{ConfigDocument, ConfigStore, default_config_path, resolve_config_path};
pub use types::{Role, Server, basic_auth_token};
