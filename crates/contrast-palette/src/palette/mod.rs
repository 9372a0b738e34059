//! Palette synthesis
//!
//! A [`Palette`] is built in one pass over a per-theme recipe table: pick the
//! background, derive each hue slot from the seed (or the honor-primary
//! color), repair it against the background, and fill in the fixed anchors.

mod palette;
mod recipe;
mod slot;
mod theme;

pub use palette::{Overrides, Palette, PaletteBuilder, SlotContrast};
pub use slot::Slot;
pub use theme::{ParseThemeModeError, ThemeMode};
