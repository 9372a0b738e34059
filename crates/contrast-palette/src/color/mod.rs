//! Color types and conversion utilities
//!
//! Three representations of the same color, each with one job:
//!
//! - [`Color`]: byte-quantized sRGB, the value that flows between pipeline
//!   stages and is printed as `#rrggbb`.
//! - [`Rgb`]: normalized floating point channels for arithmetic.
//! - [`Hsv`]: hue/saturation/value for the palette formulas and the
//!   contrast repair search.
//!
//! # Example
//!
//! ```
//! use contrast_palette::{Color, Hsv};
//!
//! let seed: Color = "#3366cc".parse().unwrap();
//! let hsv = seed.to_hsv();
//! let brighter = Color::from_hsv(Hsv::new(hsv.h, hsv.s, 1.0));
//! assert_eq!(brighter.to_hex(), "#3f7fff");
//! ```

mod error;
mod hsv;
mod lut;
mod rgb;

pub use error::ParseColorError;
pub use hsv::{wrap_hue, Hsv};
pub(crate) use lut::byte_to_linear;
pub use rgb::{Color, Rgb};
