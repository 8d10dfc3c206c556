//! Scalar value / code unit helpers shared by both conversion directions.

use crate::ByteOrder;

/// The scalar value a leading UTF-8 BOM decodes to (ZERO WIDTH NO-BREAK SPACE).
pub const BOM_SCALAR: char = '\u{FEFF}';

#[inline]
pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Encodes `ch` as one or two code units laid out in `order`.
///
/// Returns the used prefix of `buf`: 2 bytes for the Basic Multilingual Plane,
/// 4 bytes (high surrogate first) above it.
#[inline]
pub fn encode_utf16(ch: char, order: ByteOrder, buf: &mut [u8; 4]) -> &[u8] {
    let mut units = [0u16; 2];
    let units = ch.encode_utf16(&mut units);
    for (i, &unit) in units.iter().enumerate() {
        order.write_u16(&mut buf[i * 2..], unit);
    }
    &buf[..units.len() * 2]
}

/// Decodes a single code unit outside the surrogate range.
#[inline]
pub fn decode_unit(unit: u16) -> Option<char> {
    char::from_u32(u32::from(unit))
}

/// Joins a high and a low surrogate into the scalar value they encode.
#[inline]
pub fn decode_surrogate_pair(high: u16, low: u16) -> Option<char> {
    char::decode_utf16([high, low]).next()?.ok()
}

/// Width of the UTF-8 sequence introduced by `first_byte`, or 0 for a byte that
/// cannot start a sequence.
#[inline]
pub fn utf8_sequence_width(first_byte: u8) -> usize {
    if first_byte < 0x80 {
        1
    } else if (first_byte & 0xE0) == 0xC0 {
        2
    } else if (first_byte & 0xF0) == 0xE0 {
        3
    } else if (first_byte & 0xF8) == 0xF0 {
        4
    } else {
        0
    }
}

/// Decodes the first scalar value of `bytes`.
///
/// Returns the scalar value and the sequence width, or `None` when `bytes` is
/// empty or does not start with a complete, well-formed UTF-8 sequence.
#[inline]
pub fn decode_utf8(bytes: &[u8]) -> Option<(char, usize)> {
    let width = utf8_sequence_width(*bytes.first()?);
    let ch = std::str::from_utf8(bytes.get(..width)?).ok()?.chars().next()?;
    Some((ch, width))
}
