//! TeamSpeak GSI bridge configuration.
//!
//! TOML-based configuration with defaults for every section, so a
//! missing or partial file still yields a usable config.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ts3gsi_config::{load_config, config_to_json};
//!
//! let config = load_config(Path::new("/home/user/.ts3client")).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    EncodingConfig, EncodingPolicy, GsiConfig, LogLevel, LoggingConfig, TransportConfig,
};

use std::path::Path;
use ts3gsi_common::ConfigError;

/// Load the config that belongs to a host client config directory.
///
/// An empty `host_config_dir` (the console client reports none) falls back
/// to the platform config directory. A missing file is created with
/// commented defaults.
pub fn load_config(host_config_dir: &Path) -> Result<GsiConfig, ConfigError> {
    let path = if host_config_dir.as_os_str().is_empty() {
        toml_loader::default_config_path()?
    } else {
        toml_loader::config_path_in(host_config_dir)
    };
    toml_loader::load_or_create(&path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GsiConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&GsiConfig::default());
        assert!(json.contains("\"encoding\""));
        assert!(json.contains("\"transport\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"derived\""));
    }

    #[test]
    fn load_config_from_host_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.encoding.policy, EncodingPolicy::Derived);
        assert!(toml_loader::config_path_in(dir.path()).exists());
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&GsiConfig::default());
        let parsed: GsiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.transport.timeout_ms, 1500);
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }
}
