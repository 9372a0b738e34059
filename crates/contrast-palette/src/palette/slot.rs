//! Named palette slots in ANSI index order.

use crate::contrast::{MIN_CONTRAST_NON_TEXT, MIN_CONTRAST_TEXT};

/// One of the 16 palette positions.
///
/// Discriminants are the ANSI color indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Background = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    Gray = 7,
    DimGray = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    Foreground = 15,
}

impl Slot {
    /// All slots in index order.
    pub const ALL: [Slot; 16] = [
        Slot::Background,
        Slot::Red,
        Slot::Green,
        Slot::Yellow,
        Slot::Blue,
        Slot::Magenta,
        Slot::Cyan,
        Slot::Gray,
        Slot::DimGray,
        Slot::BrightRed,
        Slot::BrightGreen,
        Slot::BrightYellow,
        Slot::BrightBlue,
        Slot::BrightMagenta,
        Slot::BrightCyan,
        Slot::Foreground,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Slot::Background => "background",
            Slot::Red => "red",
            Slot::Green => "green",
            Slot::Yellow => "yellow",
            Slot::Blue => "blue",
            Slot::Magenta => "magenta",
            Slot::Cyan => "cyan",
            Slot::Gray => "gray",
            Slot::DimGray => "dim-gray",
            Slot::BrightRed => "bright-red",
            Slot::BrightGreen => "bright-green",
            Slot::BrightYellow => "bright-yellow",
            Slot::BrightBlue => "bright-blue",
            Slot::BrightMagenta => "bright-magenta",
            Slot::BrightCyan => "bright-cyan",
            Slot::Foreground => "foreground",
        }
    }

    /// Contrast floor against the background, if the slot is repaired.
    ///
    /// Normal hues use the text threshold, bright hues the non-text one.
    /// Anchors are fixed and have no floor.
    pub const fn min_contrast(self) -> Option<f64> {
        match self {
            Slot::Red | Slot::Green | Slot::Yellow | Slot::Blue | Slot::Magenta | Slot::Cyan => {
                Some(MIN_CONTRAST_TEXT)
            }
            Slot::BrightRed
            | Slot::BrightGreen
            | Slot::BrightYellow
            | Slot::BrightBlue
            | Slot::BrightMagenta
            | Slot::BrightCyan => Some(MIN_CONTRAST_NON_TEXT),
            Slot::Background | Slot::Gray | Slot::DimGray | Slot::Foreground => None,
        }
    }
}
