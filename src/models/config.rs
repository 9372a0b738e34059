use std::path::{Path, PathBuf};

use contrast_palette::ThemeMode;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::rendering::OutputFormat;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "TERMTINT_CONFIG";

/// Defaults loaded from an optional YAML file.
///
/// ```yaml
/// mode: light
/// format: kitty
/// background: "#000000"
/// honor_primary: "#ff00ff"
/// ```
///
/// Every field is optional; command-line flags win over file values.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Theme mode (`dark` or `light`)
    pub mode: Option<ThemeMode>,

    /// Output syntax (`palette` or `kitty`)
    pub format: Option<OutputFormat>,

    /// Background override as a hex literal
    pub background: Option<String>,

    /// Honor-primary color as a hex literal
    pub honor_primary: Option<String>,
}

impl FileConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content, path)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Load the config file selected by `--config` or [`CONFIG_ENV_VAR`].
    ///
    /// An explicit path must load. A path from the environment that fails to
    /// load is logged and ignored. With neither, defaults are used.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
            Some(path) => match Self::load(&path) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!(%e, "Failed to load config from environment, using defaults");
                    Ok(Self::default())
                }
            },
            None => {
                tracing::trace!("No config file configured");
                Ok(Self::default())
            }
        }
    }
}
