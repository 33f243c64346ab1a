//! Server definition types for kishell configuration.
//!
//! Responsibilities:
//! - Define `Server`, the persisted connection parameters for one Kibana endpoint.
//! - Resolve the effective port and base URL of a server.
//! - Compute the basic-auth token stored alongside a server.
//!
//! Does NOT handle:
//! - Persistence of servers (see `persistence` module).
//! - Issuing requests against a server (see client crate).
//!
//! Invariants:
//! - `basic_auth` is held in a `SecretString` so `Debug` output never reveals it.
//! - An empty `port` means "use the protocol default" (443 for https, 80 otherwise).
//! - `basic_auth` is the empty string when neither username nor password was given.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// A named Kibana server definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    /// Host name or IP address of the Kibana server.
    pub hostname: String,
    /// Either `http` or `https`.
    pub protocol: String,
    /// Explicit port; empty to use the protocol default.
    pub port: String,
    /// Value sent in the `kbn-version` header.
    pub kibana_version: String,
    /// Base64 of `user:pass`, or empty when no credentials were given.
    #[serde(with = "secret_string")]
    pub basic_auth: SecretString,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            protocol: String::new(),
            port: String::new(),
            kibana_version: String::new(),
            basic_auth: SecretString::new(String::new().into()),
        }
    }
}

impl Server {
    /// Returns the explicit port, or the default port for the protocol.
    pub fn resolved_port(&self) -> &str {
        if !self.port.is_empty() {
            &self.port
        } else if self.protocol == "https" {
            DEFAULT_HTTPS_PORT
        } else {
            DEFAULT_HTTP_PORT
        }
    }

    /// Returns `{protocol}://{hostname}:{port}` with the resolved port.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}",
            self.protocol,
            self.hostname,
            self.resolved_port()
        )
    }

    /// Whether requests to this server carry an `Authorization` header.
    pub fn has_basic_auth(&self) -> bool {
        !self.basic_auth.expose_secret().is_empty()
    }
}

/// Computes the basic-auth token for a username/password pair.
///
/// Returns an empty token when both values are empty, so that servers without
/// authentication never send an `Authorization` header.
pub fn basic_auth_token(username: &str, password: &str) -> SecretString {
    if username.is_empty() && password.is_empty() {
        return SecretString::new(String::new().into());
    }
    let encoded = STANDARD.encode(format!("{}:{}", username, password));
    SecretString::new(encoded.into())
}
