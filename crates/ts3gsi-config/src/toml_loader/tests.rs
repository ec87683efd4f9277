//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{EncodingPolicy, GsiConfig, LogLevel};
use std::path::Path;
use ts3gsi_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_ts3gsi_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[encoding]
policy = "raw"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.encoding.policy, EncodingPolicy::Raw);
    // Defaults preserved
    assert_eq!(config.transport.timeout_ms, 1500);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn unknown_policy_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[encoding]\npolicy = \"fancy\"\n").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn out_of_range_timeout_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[transport]\ntimeout_ms = 60000\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.transport.timeout_ms, 1500);
    assert_eq!(config.transport.connect_timeout_ms, 500);
}

#[test]
fn zero_timeout_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[encoding]\npolicy = \"raw\"\n\n[transport]\ntimeout_ms = 0\nconnect_timeout_ms = 0\n",
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.transport.timeout_ms, 1500);
    assert_eq!(config.transport.connect_timeout_ms, 500);
    // Sections that validated are kept.
    assert_eq!(config.encoding.policy, EncodingPolicy::Raw);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn huge_timeout_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[transport]\ntimeout_ms = 4294967295\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.transport.timeout_ms, 1500);
}

#[test]
fn valid_transport_values_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[transport]\ntimeout_ms = 3000\nconnect_timeout_ms = 250\n",
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.transport.timeout_ms, 3000);
    assert_eq!(config.transport.connect_timeout_ms, 250);
}

#[test]
fn load_or_create_writes_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path_in(dir.path());
    assert!(!path.exists());

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.encoding.policy, EncodingPolicy::Derived);

    // Second load reads the file that was just written.
    let again = load_or_create(&path).unwrap();
    assert_eq!(again.transport.timeout_ms, config.transport.timeout_ms);
}

#[test]
fn load_or_create_propagates_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[transport\n").unwrap();

    assert!(matches!(
        load_or_create(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config: GsiConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.encoding.policy, EncodingPolicy::Derived);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn config_path_in_host_dir() {
    let path = config_path_in(Path::new("/home/user/.ts3client"));
    assert_eq!(
        path,
        Path::new("/home/user/.ts3client/plugins/ts3gsi/config.toml")
    );
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("ts3gsi"));
        assert!(path_str.ends_with("config.toml"));
    }
}
