//! Byte-quantized and normalized sRGB colors
//!
//! [`Color`] is the quantized form every pipeline stage hands to the next.
//! Quantizing between stages matters: contrast is always measured on the
//! exact bytes that end up in the printed `#rrggbb` literal.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::hsv::Hsv;

/// An sRGB color with normalized floating point channels.
///
/// Values are nominally in 0.0..=1.0. Conversions from [`Hsv`] may leave a
/// channel slightly outside that range; [`Color::from_rgb`] clamps on the
/// way back to bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new Rgb color from normalized channel values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// A byte-quantized sRGB color, printed as `#rrggbb`.
///
/// # Example
///
/// ```
/// use contrast_palette::Color;
///
/// let color: Color = "3366CC".parse().unwrap();
/// assert_eq!(color.to_hex(), "#3366cc");
/// assert_eq!(color.to_bytes(), [0x33, 0x66, 0xcc]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color([u8; 3]);

impl Color {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self([0x00, 0x00, 0x00]);
    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self([0xff, 0xff, 0xff]);

    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    /// The color as a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        self.0
    }

    /// Parse a `#rrggbb` or `rrggbb` literal.
    ///
    /// Surrounding whitespace is ignored and digits may be of either case.
    /// Anything other than exactly six hex digits is rejected.
    ///
    /// # Errors
    ///
    /// - [`ParseColorError::InvalidLength`] when the digit count is not 6
    /// - [`ParseColorError::InvalidHex`] when a character is not a hex digit
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength { len: digits.len() });
        }

        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Lowercase `#rrggbb` literal.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode(self.0))
    }

    /// Normalized channels, each byte divided by 255.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        Rgb::new(
            f64::from(self.0[0]) / 255.0,
            f64::from(self.0[1]) / 255.0,
            f64::from(self.0[2]) / 255.0,
        )
    }

    /// Quantize normalized channels to bytes.
    ///
    /// Each channel is clamped to 0.0..=1.0, scaled by 255 and truncated.
    #[inline]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self([
            quantize_channel(rgb.r),
            quantize_channel(rgb.g),
            quantize_channel(rgb.b),
        ])
    }

    /// HSV representation of this color.
    #[inline]
    pub fn to_hsv(self) -> Hsv {
        Hsv::from(self.to_rgb())
    }

    /// Quantize an HSV color to bytes.
    #[inline]
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self::from_rgb(Rgb::from(hsv))
    }
}

#[inline]
fn quantize_channel(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
