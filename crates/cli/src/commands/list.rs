//! List command implementation.

use anyhow::Result;
use std::io::Write;

use crate::context::CommandContext;

/// Print the whole configuration document as indented JSON.
pub fn run<I, O: Write>(ctx: &mut CommandContext<I, O>) -> Result<()> {
    let rendered = ctx.store.to_pretty_json()?;
    writeln!(ctx.output, "{rendered}")?;
    ctx.output.flush()?;
    Ok(())
}
