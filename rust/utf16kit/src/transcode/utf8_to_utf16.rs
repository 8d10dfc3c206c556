//! UTF-8 to UTF-16 conversion.

use std::io::{Read, Write};

use utf16kit_common::{CancelSignal, Never, Result, error::Error};
use utf16kit_io::BlockWriter;

use super::{TranscodeStats, check_cancel, settle, utf8_reader::Utf8Scalars};
use crate::{
    ByteOrder, TranscodeOptions,
    bom::write_byte_order_mark,
    code_units::{BOM_SCALAR, encode_utf16},
};

/// Converts a UTF-8 stream to UTF-16 in the host's native byte order.
///
/// The output starts with the UTF-16 BOM for that order. A leading U+FEFF in the
/// input (a UTF-8 BOM) is dropped rather than converted. `cancel` is polled
/// before each scalar value.
///
/// # Errors
///
/// * `MalformedSequence` for invalid UTF-8, including a sequence truncated by
///   the end of the stream.
/// * `Cancelled` if `cancel` fires.
/// * `Io` if reading `src` or writing `dst` fails.
///
/// On any of these errors the output of the completed iterations is written to
/// `dst`, but `dst` is not flushed.
pub fn convert_utf8_to_utf16<R, W>(
    src: &mut R,
    dst: &mut W,
    cancel: impl CancelSignal,
) -> Result<TranscodeStats>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    convert_utf8_to_utf16_with_options(src, dst, &TranscodeOptions::default(), cancel)
}

/// Converts a UTF-8 stream to UTF-16, without cancellation.
pub fn utf8_to_utf16<R, W>(src: &mut R, dst: &mut W) -> Result<TranscodeStats>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    convert_utf8_to_utf16(src, dst, Never)
}

/// Converts a UTF-8 stream to UTF-16 as configured by `options`.
///
/// `options` selects the output byte order (native when unset), whether a
/// leading U+FEFF is stripped, and the block size.
pub fn convert_utf8_to_utf16_with_options<R, W>(
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
    let order = options.output_byte_order();
    log::debug!("converting UTF-8 to UTF-16 ({order})");

    let mut writer = BlockWriter::new(dst, options.buffer_size);
    let outcome = encode_scalars(src, &mut writer, order, options, &cancel);
    let stats = settle(writer, outcome)?;
    log::debug!(
        "UTF-8 to UTF-16 done: {} scalars, {} bytes in, {} bytes out",
        stats.scalars,
        stats.bytes_read,
        stats.bytes_written
    );
    Ok(stats)
}

fn encode_scalars<R, W, C>(
    src: &mut R,
    writer: &mut BlockWriter<W>,
    order: ByteOrder,
    options: &TranscodeOptions,
    cancel: &C,
) -> Result<TranscodeStats>
where
    R: Read + ?Sized,
    W: Write,
    C: CancelSignal,
{
    write_byte_order_mark(order, writer)?;

    let mut reader = Utf8Scalars::new(src, options.buffer_size);
    let mut stats = TranscodeStats::default();
    let mut buf = [0u8; 4];
    let mut first = true;
    loop {
        check_cancel(cancel)?;
        let Some(ch) = reader.next_scalar()? else {
            break;
        };
        if std::mem::take(&mut first) && ch == BOM_SCALAR && options.strip_utf8_bom {
            continue;
        }
        writer
            .write_all(encode_utf16(ch, order, &mut buf))
            .map_err(|e| Error::io("writing UTF-16 output", e))?;
        stats.scalars += 1;
    }
    stats.bytes_read = reader.position();
    Ok(stats)
}
