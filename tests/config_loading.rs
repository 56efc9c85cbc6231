//! Configuration file loading and environment overrides.

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;
use wordpress_mcp::config::{load_config, Config, ENV_PASSWORD, ENV_SITE_URL, ENV_USERNAME};
use wordpress_mcp::error::ConfigError;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn file_values_resolve_without_environment() {
    let file = write_config(
        r#"{
            "$schema": "./config.schema.json",
            "site_url": "https://blog.example.com/",
            "username": "editor",
            "password": "abcd efgh ijkl",
            "request_timeout_secs": 15,
            "logging": { "level": "debug" }
        }"#,
    );

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.logging.level, "debug");

    let site = config.resolve(|_| None).unwrap();
    assert_eq!(site.site_url, "https://blog.example.com");
    assert_eq!(site.username, "editor");
    assert_eq!(site.timeout, Some(Duration::from_secs(15)));
}

#[test]
fn environment_overrides_file() {
    let file = write_config(r#"{ "site_url": "https://old.example.com", "username": "a", "password": "b" }"#);
    let env: HashMap<&str, &str> = [
        (ENV_SITE_URL, "https://new.example.com"),
        (ENV_PASSWORD, "from-env"),
    ]
    .into_iter()
    .collect();

    let site = load_config(Some(file.path()))
        .unwrap()
        .resolve(|name| env.get(name).map(|v| (*v).to_string()))
        .unwrap();

    assert_eq!(site.site_url, "https://new.example.com");
    assert_eq!(site.username, "a");
    assert_eq!(site.password, "from-env");
    assert!(!format!("{site:?}").contains("from-env"));
}

#[test]
fn missing_credential_is_named() {
    let file = write_config(r#"{ "site_url": "https://example.com", "username": "a" }"#);
    let err = load_config(Some(file.path()))
        .unwrap()
        .resolve(|_| None)
        .unwrap_err();

    assert!(matches!(err, ConfigError::MissingValue { name } if name == ENV_PASSWORD));
    assert!(err.to_string().contains(ENV_PASSWORD));
}

#[test]
fn unknown_keys_rejected() {
    let file = write_config(r#"{ "site": "https://example.com" }"#);
    let err = load_config(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(Some(&dir.path().join("absent.json"))).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn empty_environment_value_counts_as_unset() {
    let site = Config::default().resolve(|name| match name {
        n if n == ENV_SITE_URL => Some("http://localhost:8080".to_string()),
        n if n == ENV_USERNAME => Some("admin".to_string()),
        n if n == ENV_PASSWORD => Some(String::new()),
        _ => None,
    });
    assert!(matches!(site, Err(ConfigError::MissingValue { name }) if name == ENV_PASSWORD));
}
