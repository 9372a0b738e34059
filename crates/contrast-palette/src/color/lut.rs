//! Byte-indexed linearization table generated by build.rs.

include!(concat!(env!("OUT_DIR"), "/linear_lut.rs"));

/// Linear light value of an 8-bit sRGB channel.
#[inline]
pub fn byte_to_linear(byte: u8) -> f64 {
    BYTE_TO_LINEAR[usize::from(byte)]
}
