//! Core TOML config loading: read from path, or create the default file.

use crate::schema::{GsiConfig, TransportConfig};
use crate::validation;
use std::path::Path;
use ts3gsi_common::ConfigError;
use tracing::{info, warn};

use super::paths::create_default_config;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// A config that fails validation keeps its other sections but gets the
/// default transport settings, so delivery always runs with bounded
/// timeouts.
pub fn load_from_path(path: &Path) -> Result<GsiConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let mut config: GsiConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("invalid config: {e}; using default transport settings");
        config.transport = TransportConfig::default();
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, writing the commented default first if the
/// file does not exist yet.
pub fn load_or_create(path: &Path) -> Result<GsiConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(GsiConfig::default())
        }
        Err(e) => Err(e),
    }
}
