//! Use command implementation.
//!
//! Responsibilities:
//! - Switch the current server and/or role.
//!
//! Invariants:
//! - Every requested name is validated before anything is saved.
//! - The store is saved at most once.

use anyhow::Result;
use kishell_config::ConfigError;
use tracing::info;

use crate::args::UseArgs;
use crate::context::CommandContext;
use crate::error::CommandError;

pub fn run<I, O>(ctx: &mut CommandContext<I, O>, args: &UseArgs) -> Result<()> {
    if args.server.is_none() && args.role.is_none() {
        return Err(CommandError::MissingParameter("--server | --role").into());
    }

    if let Some(name) = &args.server
        && ctx.store.find_server(name).is_none()
    {
        return Err(ConfigError::ServerNotFound(name.clone()).into());
    }
    if let Some(name) = &args.role
        && ctx.store.find_role(name).is_none()
    {
        return Err(ConfigError::RoleNotFound(name.clone()).into());
    }

    if let Some(name) = &args.server {
        ctx.store.set_server(name.clone());
        info!(server = %name, "Current server changed");
    }
    if let Some(name) = &args.role {
        ctx.store.set_role(name.clone());
        info!(role = %name, "Current role changed");
    }
    ctx.store.save()?;
    Ok(())
}
