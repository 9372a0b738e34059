use std::path::PathBuf;

use contrast_palette::ParseColorError;
use thiserror::Error;

/// Errors raised while turning command-line flags and the optional config
/// file into [`GenerateOptions`](crate::models::GenerateOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {field} '{value}': {source}")]
    InvalidColor {
        field: &'static str,
        value: String,
        source: ParseColorError,
    },

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
