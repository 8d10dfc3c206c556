use utf16kit_common::{Result, verify_arg};

use crate::ByteOrder;

/// Options controlling a single conversion.
#[derive(Debug, Clone)]
pub struct TranscodeOptions {
    pub(crate) emit_utf8_bom: bool,
    pub(crate) strip_utf8_bom: bool,
    pub(crate) byte_order: Option<ByteOrder>,
    pub(crate) buffer_size: usize,
}

impl TranscodeOptions {
    /// Block size used for input reads and output buffering by default.
    pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

    /// The smallest accepted block size. A block must be able to hold the longest
    /// UTF-8 sequence, and the UTF-8 BOM must fit without being written through.
    pub const MIN_BUFFER_SIZE: usize = 4;

    pub fn new() -> TranscodeOptions {
        TranscodeOptions {
            emit_utf8_bom: false,
            strip_utf8_bom: true,
            byte_order: None,
            buffer_size: Self::DEFAULT_BUFFER_SIZE,
        }
    }

    /// Prefix UTF-8 output with the 3-byte UTF-8 BOM. UTF-16 to UTF-8 only.
    pub fn emit_utf8_bom(mut self, emit: bool) -> Self {
        self.emit_utf8_bom = emit;
        self
    }

    /// Drop a leading U+FEFF from UTF-8 input instead of converting it.
    /// UTF-8 to UTF-16 only; enabled by default.
    pub fn strip_utf8_bom(mut self, strip: bool) -> Self {
        self.strip_utf8_bom = strip;
        self
    }

    /// Byte order for UTF-16 output. When unset, the host's native order is used.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = Some(order);
        self
    }

    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// The byte order UTF-16 output will be written in.
    pub fn output_byte_order(&self) -> ByteOrder {
        self.byte_order.unwrap_or_else(ByteOrder::native)
    }

    pub fn validate(&self) -> Result<()> {
        verify_arg!(buffer_size, self.buffer_size >= Self::MIN_BUFFER_SIZE);
        Ok(())
    }
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        TranscodeOptions::new()
    }
}
