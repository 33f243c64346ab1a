//! Integration tests for the file-backed configuration store.
//!
//! Test coverage:
//! - Save/load round-trip of servers, roles, and current pointers
//! - Missing, corrupt, and unreadable config files
//! - Reset followed by the non-empty gate

use std::fs;

use kishell_config::{ConfigError, ConfigStore, Role, Server, basic_auth_token};
use secrecy::ExposeSecret;
use tempfile::TempDir;

fn server(hostname: &str, protocol: &str) -> Server {
    Server {
        hostname: hostname.to_string(),
        protocol: protocol.to_string(),
        port: String::new(),
        kibana_version: "7.10.2".to_string(),
        basic_auth: basic_auth_token("elastic", "changeme"),
    }
}

#[test]
fn test_save_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".kishell");

    let mut store = ConfigStore::load(&path).unwrap();
    store.add_server("prod", server("kibana.prod", "https"));
    store.add_server("local", server("localhost", "http"));
    store.add_role(
        "app",
        Role {
            index: "app-*".to_string(),
            window_filter: "@timestamp".to_string(),
        },
    );
    store.set_server("prod");
    store.set_role("app");
    store.save().unwrap();

    let reloaded = ConfigStore::load(&path).unwrap();
    assert_eq!(reloaded.server_names(), vec!["local", "prod"]);
    assert_eq!(reloaded.role_names(), vec!["app"]);
    assert_eq!(reloaded.current_server_name(), "prod");
    assert_eq!(reloaded.current_role_name(), "app");

    let prod = reloaded.current_server().unwrap();
    assert_eq!(prod.hostname, "kibana.prod");
    assert_eq!(prod.resolved_port(), "443");
    assert_eq!(
        prod.basic_auth.expose_secret(),
        basic_auth_token("elastic", "changeme").expose_secret()
    );
    assert_eq!(reloaded.current_role().unwrap().index, "app-*");
}

#[test]
fn test_saved_file_uses_documented_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".kishell");

    let mut store = ConfigStore::load(&path).unwrap();
    store.add_server("prod", server("kibana.prod", "https"));
    store.set_server("prod");
    store.save().unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["default_server"], "prod");
    assert_eq!(raw["default_role"], "");
    assert_eq!(raw["servers"]["prod"]["kibana_version"], "7.10.2");
    assert_eq!(raw["servers"]["prod"]["port"], "");
    assert!(raw["roles"].as_object().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".kishell");
    fs::write(&path, "{\"servers\": [").unwrap();

    let err = ConfigStore::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(".kishell"));
}

#[test]
fn test_directory_in_place_of_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".kishell");
    fs::create_dir(&path).unwrap();

    let err = ConfigStore::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_reset_then_check_non_empty_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".kishell");

    let mut store = ConfigStore::load(&path).unwrap();
    store.add_server("prod", server("kibana.prod", "https"));
    store.add_role("app", Role::default());
    store.save().unwrap();
    assert!(store.check_non_empty().is_ok());

    store.reset().unwrap();
    assert!(matches!(
        store.check_non_empty(),
        Err(ConfigError::NotConfigured)
    ));

    let reloaded = ConfigStore::load(&path).unwrap();
    assert!(reloaded.check_non_empty().is_err());
}

#[test]
fn test_dangling_pointer_loads_without_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".kishell");
    fs::write(
        &path,
        r#"{"servers":{},"roles":{},"default_server":"gone","default_role":""}"#,
    )
    .unwrap();

    let store = ConfigStore::load(&path).unwrap();
    assert_eq!(store.current_server_name(), "gone");
    assert!(store.current_server().is_none());
}
