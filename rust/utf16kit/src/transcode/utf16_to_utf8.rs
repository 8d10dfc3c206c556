//! UTF-16 to UTF-8 conversion.

use std::io::{Read, Write};

use utf16kit_common::{CancelSignal, Never, Result, error::Error};
use utf16kit_io::{BlockWriter, ReadCursor, read_fully};

use super::{TranscodeStats, check_cancel, settle};
use crate::{
    ByteOrder, TranscodeOptions,
    bom::{detect_byte_order, write_utf8_marker},
    code_units::{decode_surrogate_pair, decode_unit, is_high_surrogate, is_low_surrogate},
};

/// Converts a UTF-16 stream, which must start with a UTF-16 BOM, to UTF-8.
///
/// When `emit_utf8_bom` is set the output starts with the UTF-8 BOM, whatever the
/// input looked like. `cancel` is polled before each scalar value.
///
/// A single byte left over after the last complete code unit is ignored.
///
/// # Errors
///
/// * `NoByteOrderMark` if the input does not start with `FF FE` or `FE FF`,
///   `UnexpectedEndOfStream` if it is shorter than two bytes. Nothing is
///   written to `dst` in either case, not even a requested UTF-8 BOM.
/// * `MalformedSequence` for an unpaired surrogate.
/// * `Cancelled` if `cancel` fires.
/// * `Io` if reading `src` or writing `dst` fails.
///
/// On the other errors the output of the completed iterations is written to
/// `dst`, but `dst` is not flushed.
pub fn convert_utf16_to_utf8<R, W>(
    src: &mut R,
    dst: &mut W,
    emit_utf8_bom: bool,
    cancel: impl CancelSignal,
) -> Result<TranscodeStats>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let options = TranscodeOptions::new().emit_utf8_bom(emit_utf8_bom);
    convert_utf16_to_utf8_with_options(src, dst, &options, cancel)
}

/// Converts a UTF-16 stream to UTF-8, without cancellation.
pub fn utf16_to_utf8<R, W>(
    src: &mut R,
    dst: &mut W,
    emit_utf8_bom: bool,
) -> Result<TranscodeStats>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    convert_utf16_to_utf8(src, dst, emit_utf8_bom, Never)
}

/// Converts a UTF-16 stream to UTF-8 as configured by `options`.
///
/// Only `emit_utf8_bom` and the block size apply; the input byte order always
/// comes from the input's BOM.
pub fn convert_utf16_to_utf8_with_options<R, W>(
    src: &mut R,
    dst: &mut W,
    options: &TranscodeOptions,
    cancel: impl CancelSignal,
) -> Result<TranscodeStats>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    options.validate()?;
    let mut writer = BlockWriter::new(dst, options.buffer_size);
    let mut reader = ReadCursor::with_capacity(src, options.buffer_size);

    // The UTF-8 marker goes first. It stays in the pending block, which a failed
    // detection discards, so the destination sees nothing in that case.
    if options.emit_utf8_bom {
        write_utf8_marker(&mut writer)?;
    }
    let order = match detect_byte_order(&mut reader) {
        Ok(order) => order,
        Err(e) => {
            writer.discard();
            return Err(e);
        }
    };
    log::debug!("converting UTF-16 ({order}) to UTF-8");

    let outcome = decode_units(&mut reader, &mut writer, order, &cancel);
    let stats = settle(writer, outcome)?;
    log::debug!(
        "UTF-16 to UTF-8 done: {} scalars, {} bytes in, {} bytes out",
        stats.scalars,
        stats.bytes_read,
        stats.bytes_written
    );
    Ok(stats)
}

/// Converts a UTF-16 stream to an in-memory string.
///
/// Same as [`convert_utf16_to_utf8`] with no UTF-8 BOM.
pub fn convert_utf16_to_string<R>(src: &mut R, cancel: impl CancelSignal) -> Result<String>
where
    R: Read + ?Sized,
{
    let mut buffer = Vec::new();
    convert_utf16_to_utf8(src, &mut buffer, false, cancel)?;
    String::from_utf8(buffer).map_err(|e| {
        Error::malformed(
            e.utf8_error().valid_up_to() as u64,
            "converted output is not valid UTF-8",
        )
    })
}

/// Converts a UTF-16 stream to an in-memory string, without cancellation.
pub fn utf16_to_string<R>(src: &mut R) -> Result<String>
where
    R: Read + ?Sized,
{
    convert_utf16_to_string(src, Never)
}

fn decode_units<R, W, C>(
    reader: &mut ReadCursor<R>,
    writer: &mut BlockWriter<W>,
    order: ByteOrder,
    cancel: &C,
) -> Result<TranscodeStats>
where
    R: Read,
    W: Write,
    C: CancelSignal,
{
    let mut stats = TranscodeStats::default();
    let mut buf = [0u8; 4];
    loop {
        check_cancel(cancel)?;
        let offset = reader.position();
        let Some(unit) = read_code_unit(reader, order)? else {
            break;
        };
        let ch = if is_high_surrogate(unit) {
            read_code_unit(reader, order)?
                .filter(|&low| is_low_surrogate(low))
                .and_then(|low| decode_surrogate_pair(unit, low))
                .ok_or_else(|| Error::malformed(offset, "unpaired high surrogate"))?
        } else {
            decode_unit(unit).ok_or_else(|| Error::malformed(offset, "unpaired low surrogate"))?
        };
        writer
            .write_all(ch.encode_utf8(&mut buf).as_bytes())
            .map_err(|e| Error::io("writing UTF-8 output", e))?;
        stats.scalars += 1;
    }
    stats.bytes_read = reader.position();
    Ok(stats)
}

/// Reads the next code unit. A clean end of stream, or a single trailing byte,
/// yields `None`.
fn read_code_unit<R: Read>(
    reader: &mut ReadCursor<R>,
    order: ByteOrder,
) -> Result<Option<u16>> {
    let mut bytes = [0u8; 2];
    match read_fully(reader, &mut bytes).map_err(|e| Error::io("reading UTF-16 input", e))? {
        2 => Ok(Some(order.read_u16(&bytes))),
        0 => Ok(None),
        _ => {
            log::warn!("ignoring trailing half code unit at byte offset {}", reader.position() - 1);
            Ok(None)
        }
    }
}
