//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;
use std::path::PathBuf;

use ctct_domain::constants::DEFAULT_USER_AGENT;
use ctct_domain::CtctError;
use ctct_infra::config;
use tempfile::{Builder, NamedTempFile};

fn write_config(contents: &str, extension: &str) -> NamedTempFile {
    let mut file =
        Builder::new().suffix(&format!(".{extension}")).tempfile().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    file
}

#[test]
fn test_load_config_from_json_file() {
    let file = write_config(
        r#"{
            "api_key": "json-key",
            "base_url": "https://sandbox.example.com/v2",
            "timeout_secs": 10,
            "oauth": {
                "client_id": "client",
                "client_secret": "secret",
                "redirect_uri": "https://example.com/cb"
            }
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(file.path().to_path_buf())).expect("config");

    assert_eq!(config.api_key, "json-key");
    assert_eq!(config.base_url, "https://sandbox.example.com/v2/");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(config.oauth.expect("oauth").redirect_uri, "https://example.com/cb");
}

#[test]
fn test_load_config_from_toml_file() {
    let file = write_config(
        r#"
api_key = "toml-key"
user_agent = "integration/1.0"

[oauth]
client_id = "client"
client_secret = "secret"
redirect_uri = "https://example.com/cb"
"#,
        "toml",
    );

    let config = config::load_from_file(Some(file.path().to_path_buf())).expect("config");

    assert_eq!(config.api_key, "toml-key");
    assert_eq!(config.user_agent, "integration/1.0");
    assert_eq!(config.oauth.expect("oauth").client_secret, "secret");
}

#[test]
fn test_file_without_api_key_is_rejected() {
    let file = write_config(r#"{ "timeout_secs": 5 }"#, "json");

    let err = config::load_from_file(Some(file.path().to_path_buf())).unwrap_err();

    assert!(matches!(err, CtctError::Config(msg) if msg.contains("api_key")));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let file = write_config("api_key = ", "toml");

    let err = config::load_from_file(Some(file.path().to_path_buf())).unwrap_err();

    assert!(matches!(err, CtctError::Config(msg) if msg.starts_with("Invalid TOML")));
}

#[test]
fn test_missing_file_is_config_error() {
    let result = config::load_from_file(Some(PathBuf::from("/nonexistent/ctct.json")));
    assert!(matches!(result, Err(CtctError::Config(_))));
}
