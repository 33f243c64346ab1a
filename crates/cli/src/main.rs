//! kishell - search Kibana-fronted Elasticsearch from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging to stderr.
//! - Map command failures to structured exit codes.
//!
//! Does NOT handle:
//! - Config persistence (see `crates/config`).
//! - Request building or response decoding (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout carries only prompts and results.

mod args;
mod commands;
mod context;
mod dispatch;
mod error;
mod interactive;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter applied with `--debug`, regardless of RUST_LOG.
const DEBUG_FILTER: &str = "warn,kishell_cli=debug,kishell_client=debug,kishell_config=debug";

/// Filter applied when RUST_LOG is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = kishell_config::load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    init_tracing(cli.debug);

    if let Err(e) = run_command(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
