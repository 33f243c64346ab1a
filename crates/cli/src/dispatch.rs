//! Command dispatch logic.
//!
//! Responsibilities:
//! - Resolve the config path and load the config store.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Process exit codes (see `main()` and `error` module).
//!
//! Invariants:
//! - The config file is loaded once per invocation.
//! - Only `search` builds an HTTP transport.

use anyhow::{Context, Result};
use kishell_client::{MsearchClient, ReqwestTransport};
use kishell_config::{ConfigStore, resolve_config_path};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::context::CommandContext;

/// Dispatch CLI commands to their respective handlers over stdin/stdout.
pub(crate) async fn run_command(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config_path)?;
    tracing::debug!(path = %config_path.display(), "Using config file");
    let store = ConfigStore::load(&config_path)?;

    let mut ctx = CommandContext::new(store, std::io::stdin().lock(), std::io::stdout().lock());

    match cli.command {
        Commands::Configure(args) => commands::configure::run(&mut ctx, &args)?,
        Commands::List => commands::list::run(&mut ctx)?,
        Commands::Use(args) => commands::use_cmd::run(&mut ctx, &args)?,
        Commands::Search(args) => {
            let transport =
                ReqwestTransport::new().context("Failed to build HTTP transport")?;
            let client = MsearchClient::new(transport);
            commands::search::run(&mut ctx, &args, &client).await?;
        }
    }

    Ok(())
}
