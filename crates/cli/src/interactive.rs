//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Provide shared helpers for interactive user prompts.
//! - Keep the prompt/answer format consistent across commands.
//!
//! Does NOT handle:
//! - Deciding which questions to ask (see `commands::configure`).
//!
//! Invariants:
//! - Prompts are written without a trailing newline and flushed before reading.
//! - End of input reads as an empty answer.

use anyhow::Result;
use std::io::{BufRead, Write};

/// Prompt the user with `label` and read one line of input.
///
/// The returned answer has its line terminator removed but is otherwise
/// untouched, so leading and trailing spaces are preserved.
pub fn prompt<I: BufRead, O: Write>(input: &mut I, output: &mut O, label: &str) -> Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(&line);
    Ok(answer.to_string())
}

/// Whether an answer to a `[Y/n]` question accepts the default.
pub fn accepts_default(answer: &str) -> bool {
    matches!(answer, "" | "Y" | "y")
}
