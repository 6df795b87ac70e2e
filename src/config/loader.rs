//! Configuration Loader
//!
//! Loads a provider conf from a JSON file, either given explicitly or found
//! in one of the default locations.

use crate::config::provider::ProviderConf;
use crate::error::{Result, TronError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a config file to load first
pub const CONFIG_PATH_ENV: &str = "TRONPY_PROVIDER_CONFIG";

/// Provider conf loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a conf from a specific file
    pub fn from_path(path: impl AsRef<Path>) -> Result<ProviderConf> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TronError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| TronError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load the first conf found in the default locations, if any
    pub fn discover() -> Result<Option<ProviderConf>> {
        Self::load_first(&Self::get_config_paths())
    }

    /// Load the first existing file in `paths`
    fn load_first(paths: &[PathBuf]) -> Result<Option<ProviderConf>> {
        for path in paths {
            if path.exists() {
                debug!(path = %path.display(), "loading provider config");
                return Self::from_path(path).map(Some);
            }
        }

        Ok(None)
    }

    /// Get list of config paths to check
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Environment variable
        if let Ok(custom_path) = std::env::var(CONFIG_PATH_ENV) {
            paths.push(PathBuf::from(custom_path));
        }

        // 2. Current directory
        paths.push(PathBuf::from("tronpy.json"));

        // 3. User config directory
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("tronpy").join("provider.json"));
        }

        // 4. Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".tronpy").join("provider.json"));
        }

        paths
    }
}
