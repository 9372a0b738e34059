//! HSV color representation
//!
//! Standard hexagonal-cone model with all three components in 0.0..=1.0.
//! Hue is cyclic: 1.0 is the same as 0.0 and values outside the unit
//! interval wrap.

use super::rgb::Rgb;

/// A color in hue/saturation/value form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue as a fraction of a full turn (0.0..1.0, cyclic)
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Value, the brightest channel (0.0..=1.0)
    pub v: f64,
}

impl Hsv {
    /// Create a new Hsv color.
    ///
    /// No normalization happens here; hue wraps when converting to RGB.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Copy of this color with a different value channel.
    #[inline]
    #[must_use]
    pub const fn with_value(self, v: f64) -> Self {
        Self { v, ..self }
    }
}

/// Wrap a hue into 0.0..1.0.
///
/// ```
/// use contrast_palette::wrap_hue;
///
/// assert!((wrap_hue(1.25) - 0.25).abs() < 1e-12);
/// assert!((wrap_hue(-0.03) - 0.97).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(1.0)
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let Rgb { r, g, b } = rgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;

        if min == max {
            return Self::new(0.0, 0.0, v);
        }

        let range = max - min;
        let s = range / max;
        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;

        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self::new(wrap_hue(sector / 6.0), s, v)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        let Hsv { h, s, v } = hsv;
        if s == 0.0 {
            return Rgb::new(v, v, v);
        }

        let h = wrap_hue(h);
        let sector = (h * 6.0).trunc();
        let f = (h * 6.0) - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u8 % 6 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}
