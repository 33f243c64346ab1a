//! Server/role store backed by a single JSON file.
//!
//! Responsibilities:
//! - Load the whole configuration document, treating a missing file as empty.
//! - Upsert and look up servers and roles by name.
//! - Track the current server and role pointers.
//! - Atomic save operations.
//!
//! Does NOT handle:
//! - Path determination (uses path module).
//! - Validating that a pointer names an existing entry (callers do).
//!
//! Invariants:
//! - Names are unique within each mapping.
//! - Mutations stay in memory until `save()` (except `reset()`).
//! - Writes are atomic (temp file + rename).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::types::{Role, Server};

use super::document::{ConfigDocument, read_document};

/// Loads, mutates, and saves the configuration document.
#[derive(Debug)]
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
    /// In-memory copy of the whole file.
    document: ConfigDocument,
}

impl ConfigStore {
    /// Loads the configuration file at `config_path`.
    ///
    /// A missing file yields an empty document without error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(config_path: impl Into<PathBuf>) -> Result<Self> {
        let config_path = config_path.into();
        let document = match read_document(&config_path)? {
            Some(document) => {
                tracing::debug!(
                    path = %config_path.display(),
                    servers = document.servers.len(),
                    roles = document.roles.len(),
                    "Loaded config file"
                );
                document
            }
            None => {
                tracing::debug!(
                    path = %config_path.display(),
                    "Config file not found, starting empty"
                );
                ConfigDocument::default()
            }
        };

        Ok(Self {
            config_path,
            document,
        })
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Finds a server by name.
    pub fn find_server(&self, name: &str) -> Option<&Server> {
        self.document.servers.get(name)
    }

    /// Finds a role by name.
    pub fn find_role(&self, name: &str) -> Option<&Role> {
        self.document.roles.get(name)
    }

    /// Adds or replaces a server definition. Does not save.
    pub fn add_server(&mut self, name: impl Into<String>, server: Server) {
        self.document.servers.insert(name.into(), server);
    }

    /// Adds or replaces a role definition. Does not save.
    pub fn add_role(&mut self, name: impl Into<String>, role: Role) {
        self.document.roles.insert(name.into(), role);
    }

    /// Sets the current server name. Does not validate or save.
    pub fn set_server(&mut self, name: impl Into<String>) {
        self.document.current_server = name.into();
    }

    /// Sets the current role name. Does not validate or save.
    pub fn set_role(&mut self, name: impl Into<String>) {
        self.document.current_role = name.into();
    }

    /// Name of the current server (empty when unset).
    pub fn current_server_name(&self) -> &str {
        &self.document.current_server
    }

    /// Name of the current role (empty when unset).
    pub fn current_role_name(&self) -> &str {
        &self.document.current_role
    }

    /// The current server, if the pointer names an existing entry.
    pub fn current_server(&self) -> Option<&Server> {
        self.find_server(&self.document.current_server)
    }

    /// The current role, if the pointer names an existing entry.
    pub fn current_role(&self) -> Option<&Role> {
        self.find_role(&self.document.current_role)
    }

    /// Sorted server names.
    pub fn server_names(&self) -> Vec<&str> {
        self.document.servers.keys().map(String::as_str).collect()
    }

    /// Sorted role names.
    pub fn role_names(&self) -> Vec<&str> {
        self.document.roles.keys().map(String::as_str).collect()
    }

    /// Fails with `NotConfigured` when no servers or no roles are defined.
    pub fn check_non_empty(&self) -> Result<()> {
        if self.document.servers.is_empty() || self.document.roles.is_empty() {
            return Err(ConfigError::NotConfigured);
        }
        Ok(())
    }

    /// Clears all servers, roles, and pointers, then saves.
    pub fn reset(&mut self) -> Result<()> {
        self.document = ConfigDocument::default();
        tracing::debug!(path = %self.config_path.display(), "Config reset");
        self.save()
    }

    /// Renders the whole document as indented JSON.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    /// Saves the whole document to disk.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string(&self.document)?;
        self.atomic_save(content.as_bytes())?;

        tracing::debug!(
            path = %self.config_path.display(),
            "Config saved successfully"
        );

        Ok(())
    }

    fn atomic_save(&self, content: &[u8]) -> Result<()> {
        let write_err = |source| ConfigError::Write {
            path: self.config_path.clone(),
            source,
        };

        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        // Write to a temporary file first
        let temp_path = temp_path_for(&self.config_path);
        write_private(&temp_path, content).map_err(write_err)?;

        // Atomically rename the temporary file to the target path
        if let Err(e) = std::fs::rename(&temp_path, &self.config_path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(write_err(e));
        }

        Ok(())
    }
}

/// `~/.kishell` becomes `~/.kishell.tmp`; `config.json` becomes `config.json.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(unix)]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(content)?;
    file.sync_all()
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, content)
}
