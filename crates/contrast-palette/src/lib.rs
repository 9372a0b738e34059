//! contrast-palette: seed-driven 16-color terminal palettes
//!
//! Derives a full ANSI palette (background, six hues, two grays, six bright
//! hues, foreground) from a single seed color, for dark or light themes.
//! Every derived hue is repaired until it is legible against the background
//! according to the WCAG contrast ratio.
//!
//! # Quick Start
//!
//! ```
//! use contrast_palette::{Color, Palette, Slot};
//!
//! let seed: Color = "#3366cc".parse().unwrap();
//! let palette = Palette::builder(seed).build();
//!
//! for (slot, color) in palette.iter() {
//!     println!("{:>2} {:<14} {color}", slot.index(), slot.name());
//! }
//! assert_eq!(palette[Slot::Background].to_hex(), "#1a1a1a");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! seed (hex) ─► Color ─► Hsv
//!                         │  per-slot hue / saturation / value formulas
//!                         ▼
//!                  candidate Color (byte-quantized)
//!                         │  ensure_contrast against slot 0
//!                         ▼
//!                  Palette [Color; 16]
//! ```
//!
//! # Contrast Repair
//!
//! Repair only moves the HSV value channel, in steps of 0.02 up to 29 steps
//! away from the original. Dark themes try brighter first, light themes try
//! darker first. When no step reaches the target ratio the original color is
//! kept: a palette can contain slots below their nominal floor, and
//! [`Palette::contrast_report`] shows which.
//!
//! Luminance follows WCAG 2.x, including its 0.03928 linearization knee.
//! There is deliberately no perceptual color space here; contrast is the only
//! legibility measure.

// palette::palette mirrors the Palette type name
#![allow(clippy::module_inception)]

pub mod color;
pub mod contrast;
pub mod palette;


pub use color::{wrap_hue, Color, Hsv, ParseColorError, Rgb};
pub use contrast::{
    contrast_ratio, ensure_contrast, meets_contrast, relative_luminance, srgb_to_linear,
    RepairDirection, MIN_CONTRAST_NON_TEXT, MIN_CONTRAST_TEXT,
};
pub use palette::{
    Overrides, Palette, PaletteBuilder, ParseThemeModeError, Slot, SlotContrast, ThemeMode,
};
