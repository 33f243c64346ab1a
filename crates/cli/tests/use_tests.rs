//! Integration tests for `kishell use` and `kishell list`.

mod common;

use common::{TestConfig, document_for};
use predicates::prelude::*;
use serde_json::{Value, json};

fn two_servers() -> Value {
    let mut document = document_for("localhost", 5601, "");
    document["servers"]["staging"] = json!({
        "hostname": "staging.example.com",
        "protocol": "https",
        "port": "",
        "kibana_version": "7.10.2",
        "basic_auth": ""
    });
    document["roles"]["audit"] = json!({ "index": "audit-*", "window_filter": "modified_date" });
    document
}

#[test]
fn test_use_switches_server_and_role() {
    let config = TestConfig::with_document(&two_servers());

    config
        .cmd()
        .args(["use", "--server=staging", "--role", "audit"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let saved = config.read();
    assert_eq!(saved["default_server"], "staging");
    assert_eq!(saved["default_role"], "audit");
}

#[test]
fn test_use_unknown_server_exits_not_found() {
    let config = TestConfig::with_document(&two_servers());

    config
        .cmd()
        .args(["use", "--server", "missing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("server 'missing' is invalid"));

    assert_eq!(config.read()["default_server"], "local");
}

#[test]
fn test_use_without_flags_fails() {
    let config = TestConfig::with_document(&two_servers());

    config
        .cmd()
        .arg("use")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("--server | --role"));
}

#[test]
fn test_list_prints_pretty_document() {
    let config = TestConfig::with_document(&two_servers());

    let output = config.cmd().arg("list").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("\n  \"servers\""));
    let printed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(printed, two_servers());
}

#[test]
fn test_list_without_config_file() {
    let config = TestConfig::empty();

    config
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default_server\": \"\""));
}

#[test]
fn test_config_path_from_env() {
    let config = TestConfig::with_document(&two_servers());

    common::kishell_cmd()
        .env("KISHELL_CONFIG_PATH", config.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("staging.example.com"));
}

#[test]
fn test_corrupt_config_file_fails() {
    let config = TestConfig::empty();
    std::fs::write(config.path(), "{not json").unwrap();

    config
        .cmd()
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
