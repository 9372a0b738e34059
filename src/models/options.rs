use contrast_palette::{Color, Overrides, ThemeMode};

use super::config::FileConfig;
use crate::error::ConfigError;
use crate::rendering::OutputFormat;

/// Unvalidated values taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub base_color: String,
    pub light: bool,
    pub kitty: bool,
    pub honor_primary: Option<String>,
    pub background: Option<String>,
}

/// Fully resolved and validated inputs for one palette run.
///
/// Built once, before any palette logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub base_color: Color,
    pub mode: ThemeMode,
    pub format: OutputFormat,
    pub honor_primary: Option<Color>,
    pub background: Option<Color>,
}

impl GenerateOptions {
    /// Merge command-line values over file defaults and parse every color.
    ///
    /// `--light` and `--kitty` can only switch a setting on; without them the
    /// file (or the built-in default) decides.
    pub fn resolve(raw: &RawOptions, file: &FileConfig) -> Result<Self, ConfigError> {
        let mode = if raw.light {
            ThemeMode::Light
        } else {
            file.mode.unwrap_or_default()
        };

        let format = if raw.kitty {
            OutputFormat::Kitty
        } else {
            file.format.unwrap_or_default()
        };

        let honor_primary = raw.honor_primary.as_ref().or(file.honor_primary.as_ref());
        let background = raw.background.as_ref().or(file.background.as_ref());

        Ok(Self {
            base_color: parse_color("base color", &raw.base_color)?,
            mode,
            format,
            honor_primary: honor_primary
                .map(|value| parse_color("honor-primary color", value))
                .transpose()?,
            background: background
                .map(|value| parse_color("background color", value))
                .transpose()?,
        })
    }

    /// The override part, as the palette generator takes it.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            honor_primary: self.honor_primary,
            background: self.background,
        }
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
        source,
    })
}
