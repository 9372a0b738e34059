//! WCAG relative luminance and contrast ratio.
//!
//! Luminance is computed from the byte-quantized [`Color`], so linearized
//! channels come straight out of the build-time lookup table. The table is
//! generated with [`srgb_to_linear`] and agrees with it bit for bit.

mod repair;

pub use repair::{ensure_contrast, RepairDirection, REPAIR_STEPS, REPAIR_STEP_SIZE};

use crate::color::{byte_to_linear, Color};

/// WCAG AA threshold for normal text.
pub const MIN_CONTRAST_TEXT: f64 = 4.5;

/// WCAG threshold for large text and non-text elements.
pub const MIN_CONTRAST_NON_TEXT: f64 = 3.0;

/// Decode one gamma-encoded sRGB channel (0.0..=1.0) to linear light.
///
/// Uses the 0.03928 knee from the WCAG 2.x definition.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = color.to_bytes();
    0.2126 * byte_to_linear(r) + 0.7152 * byte_to_linear(g) + 0.0722 * byte_to_linear(b)
}

/// WCAG contrast ratio between two colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`; symmetric, always in
/// [1.0, 21.0].
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether `fg` reaches `min_ratio` against `bg`.
#[inline]
#[must_use]
pub fn meets_contrast(fg: Color, bg: Color, min_ratio: f64) -> bool {
    contrast_ratio(fg, bg) >= min_ratio
}
