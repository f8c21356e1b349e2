//! Whole-buffer conversions between the UTF-8, UTF-16 and UTF-32 encoding
//! forms, with an optional strict mode that rejects lone or invalid
//! surrogate values.

mod error;
mod utf;

pub use error::{ConvertError, SUCCESS_CODE};

/// Converts UTF-8 bytes to UTF-16 units via the 32-bit intermediate form.
///
/// A leading `EF BB BF` signature is consumed and re-emitted as a single
/// U+FEFF unit.
pub fn utf8_to_utf16(input: &[u8], strict: bool) -> Result<Vec<u16>, ConvertError> {
    let points = utf::utf8::decode(input, strict)?;
    utf::utf16::encode(&points, strict)
}

/// Converts UTF-8 bytes to code points.
pub fn utf8_to_utf32(input: &[u8], strict: bool) -> Result<Vec<u32>, ConvertError> {
    utf::utf8::decode(input, strict)
}

/// Converts UTF-16 units to UTF-8 bytes via the 32-bit intermediate form.
///
/// The first unit is only consulted to fix the byte order; a byte order mark
/// is kept in the stream and transcoded along with the rest.
pub fn utf16_to_utf8(input: &[u16], strict: bool) -> Result<Vec<u8>, ConvertError> {
    let points = utf::utf16::decode(input, strict)?;
    utf::utf8::encode(&points, strict)
}

/// Converts UTF-16 units to code points.
pub fn utf16_to_utf32(input: &[u16], strict: bool) -> Result<Vec<u32>, ConvertError> {
    utf::utf16::decode(input, strict)
}

/// Converts code points to UTF-8 bytes.
pub fn utf32_to_utf8(input: &[u32], strict: bool) -> Result<Vec<u8>, ConvertError> {
    utf::utf8::encode(input, strict)
}

/// Converts code points to UTF-16 units.
pub fn utf32_to_utf16(input: &[u32], strict: bool) -> Result<Vec<u16>, ConvertError> {
    utf::utf16::encode(input, strict)
}
