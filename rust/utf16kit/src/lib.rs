//! Streaming conversion between UTF-8 and UTF-16 with byte-order mark handling.
//!
//! - BOM handling: [`detect_byte_order`], [`write_byte_order_mark`],
//!   [`write_utf8_marker`].
//! - UTF-8 to UTF-16: [`convert_utf8_to_utf16`] writes a UTF-16 BOM followed by the
//!   converted text, dropping a leading UTF-8 BOM from the input.
//! - UTF-16 to UTF-8: [`convert_utf16_to_utf8`] requires a UTF-16 BOM on the input
//!   and optionally prefixes the output with a UTF-8 BOM;
//!   [`convert_utf16_to_string`] collects the result in memory.
//!
//! Every conversion polls a [`CancelSignal`] before each scalar value. The
//! `utf8_to_utf16` / `utf16_to_utf8` / `utf16_to_string` shorthands run without
//! cancellation.

pub mod bom;
pub mod byte_order;
pub mod code_units;
pub mod options;
pub mod transcode;

pub use bom::{
    UTF8_BOM, UTF16BE_BOM, UTF16LE_BOM, detect_byte_order, write_byte_order_mark,
    write_utf8_marker,
};
pub use byte_order::ByteOrder;
pub use options::TranscodeOptions;
pub use transcode::{
    TranscodeStats,
    utf8_to_utf16::{convert_utf8_to_utf16, convert_utf8_to_utf16_with_options, utf8_to_utf16},
    utf16_to_utf8::{
        convert_utf16_to_string, convert_utf16_to_utf8, convert_utf16_to_utf8_with_options,
        utf16_to_string, utf16_to_utf8,
    },
};
pub use utf16kit_common::{
    CancelReason, CancelSignal, CancellationToken, Never, Result,
    error::{Error, ErrorKind},
};
