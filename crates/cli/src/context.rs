//! Execution context shared by command handlers.
//!
//! Responsibilities:
//! - Own the loaded `ConfigStore` for the duration of one command.
//! - Carry the input and output streams handlers read from and write to.
//!
//! Does NOT handle:
//! - Loading the store (done in `dispatch`).
//! - Building the HTTP client (done in `dispatch`).

use anyhow::Result;
use kishell_config::ConfigStore;
use std::io::{BufRead, Write};

use crate::interactive;

/// State handed to every command handler.
///
/// Generic over the streams so tests can drive handlers with in-memory buffers.
pub(crate) struct CommandContext<I, O> {
    pub(crate) store: ConfigStore,
    pub(crate) input: I,
    pub(crate) output: O,
}

impl<I, O> CommandContext<I, O> {
    pub(crate) fn new(store: ConfigStore, input: I, output: O) -> Self {
        Self {
            store,
            input,
            output,
        }
    }
}

impl<I: BufRead, O: Write> CommandContext<I, O> {
    /// Ask one question on `output` and read the answer from `input`.
    pub(crate) fn prompt(&mut self, label: &str) -> Result<String> {
        interactive::prompt(&mut self.input, &mut self.output, label)
    }
}
