//! CLI command implementations.

pub mod configure;
pub mod list;
pub mod search;
pub mod use_cmd;
