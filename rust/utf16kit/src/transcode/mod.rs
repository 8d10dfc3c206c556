//! Streaming conversion between UTF-8 and UTF-16.
//!
//! Both directions read the source in blocks, buffer the output in blocks, and poll
//! the caller's cancellation signal once before each scalar value. On success the
//! destination is flushed. When a conversion stops early, for cancellation or any
//! other error, the output of every completed iteration is written to the
//! destination, which is left unflushed. The one exception is a failed UTF-16 BOM
//! detection, which leaves the destination untouched.

use std::io::Write;

use utf16kit_common::{CancelSignal, Result, error::Error};
use utf16kit_io::BlockWriter;

pub mod utf16_to_utf8;
pub mod utf8_reader;
pub mod utf8_to_utf16;

/// Summary of a completed conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    /// Bytes consumed from the source, including any BOM.
    pub bytes_read: u64,
    /// Bytes written to the destination, including any BOM.
    pub bytes_written: u64,
    /// Scalar values converted. A stripped or emitted BOM is not counted.
    pub scalars: u64,
}

/// Settles the output of a conversion loop.
///
/// Success writes the pending block and flushes the destination. Any error writes
/// the pending block without flushing and is returned as is; a failure to write
/// that block is only logged.
fn settle<W: Write>(
    writer: BlockWriter<W>,
    outcome: Result<TranscodeStats>,
) -> Result<TranscodeStats> {
    match outcome {
        Ok(mut stats) => {
            stats.bytes_written = writer.total();
            writer
                .finish()
                .map_err(|e| Error::io("flushing converted output", e))?;
            Ok(stats)
        }
        Err(e) => {
            let written = writer.total();
            match writer.release() {
                Ok(_) => log::debug!("{e} after {written} output bytes"),
                Err(write_err) => log::warn!("{e}; partial output was not written: {write_err}"),
            }
            Err(e)
        }
    }
}

#[inline]
fn check_cancel<C: CancelSignal + ?Sized>(cancel: &C) -> Result<()> {
    match cancel.check() {
        Some(reason) => Err(Error::cancelled(reason)),
        None => Ok(()),
    }
}
