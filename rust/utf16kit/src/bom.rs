//! Byte-order mark detection and emission.

use std::io::{Read, Write};

use utf16kit_common::{Result, error::Error};
use utf16kit_io::read_fully;

use crate::ByteOrder;

/// The BOM for UTF-16LE.
pub const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// The BOM for UTF-16BE.
pub const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];
/// The BOM for UTF-8.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Detects the UTF-16 byte order from the first two bytes of `src`.
///
/// Exactly two bytes are consumed whatever the outcome; they are not pushed
/// back when no marker is recognized.
///
/// # Errors
///
/// * `UnexpectedEndOfStream` if the stream holds fewer than two bytes.
/// * `NoByteOrderMark` if the bytes are neither `FF FE` nor `FE FF`.
/// * `Io` if reading fails.
pub fn detect_byte_order<R: Read + ?Sized>(src: &mut R) -> Result<ByteOrder> {
    let mut marker = [0u8; 2];
    let n = read_fully(src, &mut marker).map_err(|e| Error::io("UTF-16 byte-order mark", e))?;
    if n < marker.len() {
        return Err(Error::unexpected_eos("UTF-16 byte-order mark"));
    }
    let order = ByteOrder::from_bom(marker).ok_or_else(Error::no_byte_order_mark)?;
    log::trace!("detected UTF-16 byte order {order}");
    Ok(order)
}

/// Writes the 2-byte UTF-16 BOM for `order` to `dst`.
///
/// Passing `None` writes nothing and fails with `NoByteOrderMark`: there is no
/// default order.
pub fn write_byte_order_mark<W: Write + ?Sized>(
    order: impl Into<Option<ByteOrder>>,
    dst: &mut W,
) -> Result<()> {
    let order = order.into().ok_or_else(Error::no_byte_order_mark)?;
    dst.write_all(&order.bom()).map_err(|e| Error::io("UTF-16 byte-order mark", e))
}

/// Writes the 3-byte UTF-8 BOM to `dst`.
pub fn write_utf8_marker<W: Write + ?Sized>(dst: &mut W) -> Result<()> {
    dst.write_all(&UTF8_BOM).map_err(|e| Error::io("UTF-8 byte-order mark", e))
}
