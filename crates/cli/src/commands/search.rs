//! Search command implementation.
//!
//! Responsibilities:
//! - Resolve the server, role, and time window for a search.
//! - Print each returned document as one compact JSON line.
//!
//! Does NOT handle:
//! - Payload construction or response decoding (see client crate).
//!
//! Invariants:
//! - Every lookup and period is resolved before any request is sent.

use anyhow::{Context, Result};
use kishell_client::{
    HttpTransport, MsearchClient, SearchPayload, build_clause, local_time_zone, now_millis,
    resolve_period,
};
use kishell_config::{ConfigError, ConfigStore, Server};
use std::io::Write;
use tracing::debug;

use crate::args::SearchArgs;
use crate::context::CommandContext;

pub async fn run<I, O: Write, T: HttpTransport>(
    ctx: &mut CommandContext<I, O>,
    args: &SearchArgs,
    client: &MsearchClient<T>,
) -> Result<()> {
    ctx.store.check_non_empty()?;

    let server = resolve_server(&ctx.store, args.server.as_deref())?;
    let role = ctx
        .store
        .current_role()
        .ok_or_else(|| ConfigError::RoleNotFound(ctx.store.current_role_name().to_string()))?;

    let now = now_millis();
    let older = resolve_period(&args.older, now).context("Invalid --older value")?;
    let newer = resolve_period(&args.newer, now).context("Invalid --newer value")?;
    debug!(newer, older, "Resolved search window");

    let payload = SearchPayload {
        index: role.index.clone(),
        size: args.limit,
        window_filter: role.window_filter.clone(),
        time_zone: local_time_zone(),
        clause: build_clause(args.query.as_deref()),
        newer,
        older,
    };

    let documents = client.search(server, &payload).await?;

    for document in &documents {
        writeln!(ctx.output, "{}", serde_json::to_string(document)?)?;
    }
    ctx.output.flush()?;
    Ok(())
}

/// The `--server` override if given, else the current server.
fn resolve_server<'a>(store: &'a ConfigStore, name: Option<&str>) -> Result<&'a Server> {
    let name = name.unwrap_or(store.current_server_name());
    store
        .find_server(name)
        .ok_or_else(|| ConfigError::ServerNotFound(name.to_string()).into())
}
