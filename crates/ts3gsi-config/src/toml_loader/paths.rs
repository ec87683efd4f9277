//! Config path resolution and default file creation.

use std::path::{Path, PathBuf};
use ts3gsi_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "ts3gsi";
const FILE_NAME: &str = "config.toml";

/// Config file inside the host client's config directory.
pub fn config_path_in(host_config_dir: &Path) -> PathBuf {
    host_config_dir
        .join("plugins")
        .join(APP_DIR)
        .join(FILE_NAME)
}

/// Get the platform-specific default config file path.
///
/// Used when the host does not report a config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_DIR).join(FILE_NAME))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
