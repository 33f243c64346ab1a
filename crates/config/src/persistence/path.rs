//! Path helpers for the configuration file location.
//!
//! Responsibilities:
//! - Determine the config file path from CLI override, environment, or home directory.
//! - Use `directories` crate for the platform home directory.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use crate::constants::{CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use crate::env::env_var_or_none;
use crate::error::{ConfigError, Result};

/// Returns the default path to the configuration file: `~/.kishell`.
pub fn default_config_path() -> Result<PathBuf> {
    let base_dirs = directories::BaseDirs::new().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(base_dirs.home_dir().join(CONFIG_FILE_NAME))
}

/// Resolves the config file path.
///
/// Precedence: explicit override (blank values ignored), then
/// `KISHELL_CONFIG_PATH`, then `~/.kishell`.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path
        && !path.to_string_lossy().trim().is_empty()
    {
        return Ok(path);
    }

    if let Some(path) = env_var_or_none(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    default_config_path()
}
