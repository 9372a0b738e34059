//! Error type for hex color literals.

use thiserror::Error;

/// Error returned when a hex color literal cannot be parsed.
///
/// Only the six-digit `#rrggbb` form (with or without the `#`) is accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has the wrong number of digits after stripping `#`
    #[error("invalid color format: expected 6 hex digits, got {len}")]
    InvalidLength {
        /// Number of characters left after stripping `#`
        len: usize,
    },
    /// A character is not a hexadecimal digit
    #[error("invalid color format: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
