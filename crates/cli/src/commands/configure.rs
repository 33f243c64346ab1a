//! Configure command implementation.
//!
//! Responsibilities:
//! - Interactively add a server or a role definition.
//! - Reset the whole configuration.
//!
//! Does NOT handle:
//! - Flag exclusivity (enforced by clap in `args`).
//!
//! Invariants:
//! - A newly added server or role becomes current when nothing was current before.
//! - The store is saved exactly once per successful invocation.

use anyhow::Result;
use kishell_config::{Role, Server, basic_auth_token};
use std::io::{BufRead, Write};
use tracing::info;

use crate::args::ConfigureArgs;
use crate::context::CommandContext;
use crate::error::CommandError;
use crate::interactive::accepts_default;

const DEFAULT_QUESTION: &str = "Set as default? [Y/n]";

pub fn run<I: BufRead, O: Write>(ctx: &mut CommandContext<I, O>, args: &ConfigureArgs) -> Result<()> {
    if args.server {
        add_server(ctx)?;
    } else if args.role {
        add_role(ctx)?;
    } else if args.reset {
        ctx.store.reset()?;
        info!("Configuration reset");
    } else {
        return Err(CommandError::MissingParameter("--server | --role | --reset").into());
    }
    Ok(())
}

fn add_server<I: BufRead, O: Write>(ctx: &mut CommandContext<I, O>) -> Result<()> {
    let name = ctx.prompt("Server name")?;
    if name.is_empty() {
        return Err(CommandError::EmptyName("server").into());
    }
    let protocol = ctx.prompt("Protocol")?;
    let hostname = ctx.prompt("Hostname")?;
    let port = ctx.prompt("Port")?;
    let username = ctx.prompt("Username")?;
    let password = ctx.prompt("Password")?;
    let kibana_version = ctx.prompt("Kibana Version")?;
    let set_default = accepts_default(&ctx.prompt(DEFAULT_QUESTION)?);

    let server = Server {
        hostname,
        protocol,
        port,
        kibana_version,
        basic_auth: basic_auth_token(&username, &password),
    };

    let make_current = ctx.store.current_server_name().is_empty() || set_default;
    ctx.store.add_server(name.clone(), server);
    if make_current {
        ctx.store.set_server(name.clone());
    }
    ctx.store.save()?;

    info!(server = %name, current = make_current, "Server saved");
    Ok(())
}

fn add_role<I: BufRead, O: Write>(ctx: &mut CommandContext<I, O>) -> Result<()> {
    let name = ctx.prompt("Role name")?;
    if name.is_empty() {
        return Err(CommandError::EmptyName("role").into());
    }
    let index = ctx.prompt("Index name")?;
    let window_filter = ctx.prompt("Window filter time (e.g. @timestamp, modified_date)")?;
    let set_default = accepts_default(&ctx.prompt(DEFAULT_QUESTION)?);

    let make_current = ctx.store.current_role_name().is_empty() || set_default;
    ctx.store.add_role(
        name.clone(),
        Role {
            index,
            window_filter,
        },
    );
    if make_current {
        ctx.store.set_role(name.clone());
    }
    ctx.store.save()?;

    info!(role = %name, current = make_current, "Role saved");
    Ok(())
}
