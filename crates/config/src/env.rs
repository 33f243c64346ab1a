//! Environment variable helpers.
//!
//! Responsibilities:
//! - Read environment variables with blank values treated as unset.
//! - Load a `.env` file before CLI parsing so clap `env` defaults can see it.
//!
//! Does NOT handle:
//! - Config file path precedence (see `persistence::path`).

use crate::constants::DOTENV_DISABLED_ENV;
use crate::error::{ConfigError, Result};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Whether `.env` loading is disabled via `DOTENV_DISABLED`.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_ENV).ok().as_deref(),
        Some("1") | Some("true")
    )
}

/// Load environment variables from a `.env` file in the working directory.
///
/// Missing `.env` files are silently ignored.
///
/// # Errors
///
/// Returns an error if the `.env` file exists but has invalid syntax or
/// cannot be read. Error messages never include raw .env line contents.
pub fn load_dotenv() -> Result<()> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(())
        }
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => {
            Err(ConfigError::DotenvParse { error_index: idx })
        }
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}
