//! Text renderers for a generated palette.

use std::io::{self, Write};

use contrast_palette::Palette;
use serde::Deserialize;

/// Output syntax written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `palette = <index>=<hex>`, one line per slot
    #[default]
    Palette,
    /// kitty.conf `color<index>   <hex>`, one line per slot
    Kitty,
}

impl OutputFormat {
    /// Render all 16 slots, one line each, newline terminated.
    pub fn render(self, palette: &Palette) -> String {
        palette
            .colors()
            .iter()
            .enumerate()
            .map(|(index, color)| self.line(index, &color.to_hex()) + "\n")
            .collect()
    }

    /// Write the rendered palette to `out`.
    pub fn write_to<W: Write>(self, palette: &Palette, mut out: W) -> io::Result<()> {
        out.write_all(self.render(palette).as_bytes())?;
        out.flush()
    }

    fn line(self, index: usize, hex: &str) -> String {
        match self {
            OutputFormat::Palette => format!("palette = {index}={hex}"),
            OutputFormat::Kitty => format!("color{index}   {hex}"),
        }
    }
}
