//! Configuration type definitions for kishell.
//!
//! Responsibilities:
//! - Define the persisted `Server` and `Role` entries.
//! - Provide serialization helpers for sensitive values.
//!
//! Does NOT handle:
//! - Reading or writing the config file (see `persistence` module).
//! - Issuing requests (see client crate).
//!
//! Invariants:
//! - Field names match the on-disk JSON format exactly.
//! - Secret values use `secrecy::SecretString` to prevent accidental logging.

mod role;
mod server;

pub use role::Role;
pub use server::{Server, basic_auth_token};
