//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Provide defaults for the search window and result limit.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load the config file (see `dispatch` module).

use clap::{Args, Parser, Subcommand};
use kishell_config::constants::{CONFIG_PATH_ENV, DEFAULT_LIMIT, DEFAULT_NEWER, DEFAULT_OLDER};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kishell")]
#[command(about = "Search Kibana logs from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  kishell configure --server\n  kishell configure --role\n  kishell use --server production\n  kishell search --query 'level:error' --newer 1h\n  kishell search --server staging --older 1h --newer 2h --limit 100\n"
)]
pub struct Cli {
    /// Enable debug mode.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a custom configuration file (overrides ~/.kishell).
    ///
    /// Can also be set via KISHELL_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = CONFIG_PATH_ENV, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Init ES server configs
    Configure(ConfigureArgs),

    /// Show the current server configs
    List,

    /// Search for data
    Search(SearchArgs),

    /// Update config options with server/role preferences
    Use(UseArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct ConfigureArgs {
    /// Add a new server definition
    #[arg(long, conflicts_with_all = ["role", "reset"])]
    pub server: bool,

    /// Add a new role definition
    #[arg(long, conflicts_with = "reset")]
    pub role: bool,

    /// Reset the whole configuration
    #[arg(long)]
    pub reset: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct UseArgs {
    /// Set what server to use when querying ES
    #[arg(long, value_name = "NAME")]
    pub server: Option<String>,

    /// Set what role to use when querying ES
    #[arg(long, value_name = "NAME")]
    pub role: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Text input to query data. Use the same format as you would use in Kibana
    #[arg(long)]
    pub query: Option<String>,

    /// Data older than (e.g. now, 30m, 1h, 1w, 1M, 1y)
    #[arg(long, default_value = DEFAULT_OLDER, allow_hyphen_values = true, value_name = "PERIOD")]
    pub older: String,

    /// Data newer than (e.g. 15m, 30m, 1h, 1w, 1M, 1y)
    #[arg(long, default_value = DEFAULT_NEWER, allow_hyphen_values = true, value_name = "PERIOD")]
    pub newer: String,

    /// Limit the number of messages fetched
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Which server to query against. Overrides the current server
    #[arg(long, value_name = "NAME")]
    pub server: Option<String>,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            query: None,
            older: DEFAULT_OLDER.to_string(),
            newer: DEFAULT_NEWER.to_string(),
            limit: DEFAULT_LIMIT,
            server: None,
        }
    }
}
