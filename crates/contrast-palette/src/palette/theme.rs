//! Theme mode and its fixed anchor colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::contrast::RepairDirection;

/// Dark or light variant of a palette.
///
/// Governs the default background, the fixed gray and foreground anchors,
/// which per-slot formulas apply, and the direction contrast repair tries
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Error for a theme name other than `dark` or `light`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode '{0}' (expected 'dark' or 'light')")]
pub struct ParseThemeModeError(String);

impl ThemeMode {
    /// `Light` when `is_light` is set, `Dark` otherwise.
    pub const fn from_light_flag(is_light: bool) -> Self {
        if is_light {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    pub const fn is_light(self) -> bool {
        matches!(self, ThemeMode::Light)
    }

    /// Background used for slot 0 when no override is given.
    pub const fn default_background(self) -> Color {
        match self {
            ThemeMode::Dark => Color::from_u8(0x1a, 0x1a, 0x1a),
            ThemeMode::Light => Color::from_u8(0xf8, 0xf8, 0xf8),
        }
    }

    /// Foreground anchor (slot 15).
    pub const fn foreground(self) -> Color {
        match self {
            ThemeMode::Dark => Color::WHITE,
            ThemeMode::Light => Color::from_u8(0x1a, 0x1a, 0x1a),
        }
    }

    /// Grayscale anchors (slots 7 and 8).
    pub const fn grays(self) -> [Color; 2] {
        match self {
            ThemeMode::Dark => [
                Color::from_u8(0xab, 0xb2, 0xbf),
                Color::from_u8(0x5c, 0x63, 0x70),
            ],
            ThemeMode::Light => [
                Color::from_u8(0x2e, 0x2e, 0x2e),
                Color::from_u8(0x4a, 0x4a, 0x4a),
            ],
        }
    }

    /// Order in which contrast repair tries value adjustments at each step.
    ///
    /// Dark themes prefer brighter colors, light themes darker ones.
    pub const fn repair_order(self) -> [RepairDirection; 2] {
        match self {
            ThemeMode::Dark => [RepairDirection::Brighten, RepairDirection::Darken],
            ThemeMode::Light => [RepairDirection::Darken, RepairDirection::Brighten],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}
