//! Contrast repair: nudge a color's HSV value until it is legible.
//!
//! Only the value channel moves. Hue and saturation are kept, so a repaired
//! red is still recognizably the same red. The search walks outward from the
//! original value in fixed steps, trying the theme's preferred direction
//! first at every distance.

use super::contrast_ratio;
use crate::color::Color;
use crate::palette::ThemeMode;

/// Number of steps tried in each direction before giving up.
pub const REPAIR_STEPS: u32 = 29;

/// Value-channel distance added per step.
pub const REPAIR_STEP_SIZE: f64 = 0.02;

/// Which way a repair candidate moves the value channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairDirection {
    /// Raise value, capped at 1.0
    Brighten,
    /// Lower value, floored at 0.0
    Darken,
}

impl RepairDirection {
    fn apply(self, v: f64, delta: f64) -> f64 {
        match self {
            RepairDirection::Brighten => (v + delta).min(1.0),
            RepairDirection::Darken => (v - delta).max(0.0),
        }
    }
}

/// Adjust `color` until it reaches `min_ratio` contrast against `background`.
///
/// - A color that already passes is returned unchanged.
/// - Otherwise candidates at value distance `step * 0.02` for
///   `step = 1..=29` are tried, in [`ThemeMode::repair_order`] at each
///   distance, and the first passing one is returned.
/// - If none passes, the original color is returned unchanged. Callers must
///   tolerate colors below the nominal floor.
///
/// # Example
///
/// ```
/// use contrast_palette::{contrast_ratio, ensure_contrast, Color, ThemeMode};
///
/// let bg: Color = "#1a1a1a".parse().unwrap();
/// let dim: Color = "#553322".parse().unwrap();
/// let fixed = ensure_contrast(dim, bg, 4.5, ThemeMode::Dark);
/// assert!(contrast_ratio(fixed, bg) >= 4.5);
/// ```
#[must_use]
pub fn ensure_contrast(color: Color, background: Color, min_ratio: f64, mode: ThemeMode) -> Color {
    if contrast_ratio(color, background) >= min_ratio {
        return color;
    }

    let hsv = color.to_hsv();
    let order = mode.repair_order();

    for step in 1..=REPAIR_STEPS {
        let delta = f64::from(step) * REPAIR_STEP_SIZE;
        for direction in order {
            let candidate = Color::from_hsv(hsv.with_value(direction.apply(hsv.v, delta)));
            if contrast_ratio(candidate, background) >= min_ratio {
                return candidate;
            }
        }
    }

    color
}
