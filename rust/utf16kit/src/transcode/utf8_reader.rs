//! Block-wise UTF-8 scalar value reader.

use std::io::Read;

use utf16kit_common::{Result, error::Error};

use crate::code_units::decode_utf8;

/// Yields the scalar values of a UTF-8 byte stream one at a time.
///
/// The source is read in blocks; each block is validated up front and scalar
/// values are then handed out from the validated prefix. A sequence split across
/// two blocks is carried over to the next block. Any malformed sequence is
/// reported with its absolute byte offset once every scalar value preceding it
/// has been handed out.
pub struct Utf8Scalars<'a, R: Read + ?Sized> {
    src: &'a mut R,
    block: Box<[u8]>,
    /// Next undelivered byte in `block`.
    start: usize,
    /// End of the validated prefix of `block`.
    valid_end: usize,
    /// End of the data in `block`.
    end: usize,
    /// Absolute stream offset of `block[0]`.
    offset: u64,
    eof: bool,
}

impl<'a, R: Read + ?Sized> Utf8Scalars<'a, R> {
    /// The longest UTF-8 sequence; blocks are never smaller.
    const MAX_SEQUENCE: usize = 4;

    pub fn new(src: &'a mut R, block_size: usize) -> Self {
        Utf8Scalars {
            src,
            block: vec![0u8; block_size.max(Self::MAX_SEQUENCE)].into_boxed_slice(),
            start: 0,
            valid_end: 0,
            end: 0,
            offset: 0,
            eof: false,
        }
    }

    /// Number of source bytes consumed by the scalar values handed out so far.
    pub fn position(&self) -> u64 {
        self.offset + self.start as u64
    }

    /// Returns the next scalar value, or `None` at a clean end of stream.
    pub fn next_scalar(&mut self) -> Result<Option<char>> {
        if self.start == self.valid_end && !self.refill()? {
            return Ok(None);
        }
        let (ch, width) = decode_utf8(&self.block[self.start..self.valid_end])
            .ok_or_else(|| Error::malformed(self.position(), "invalid UTF-8 sequence"))?;
        self.start += width;
        Ok(Some(ch))
    }

    /// Makes a new validated prefix available. Returns `false` at a clean end of
    /// stream.
    fn refill(&mut self) -> Result<bool> {
        // Carry undelivered bytes (an incomplete or invalid sequence and whatever
        // follows it) to the front of the block.
        self.block.copy_within(self.start..self.end, 0);
        self.offset += self.start as u64;
        self.end -= self.start;
        self.start = 0;
        self.valid_end = 0;

        loop {
            if self.end > 0 {
                match simdutf8::compat::from_utf8(&self.block[..self.end]) {
                    Ok(_) => {
                        self.valid_end = self.end;
                        return Ok(true);
                    }
                    Err(e) if e.valid_up_to() > 0 => {
                        self.valid_end = e.valid_up_to();
                        return Ok(true);
                    }
                    Err(e) if e.error_len().is_some() => {
                        return Err(Error::malformed(self.offset, "invalid UTF-8 sequence"));
                    }
                    // An incomplete sequence at the front: read more.
                    Err(_) => {}
                }
            }

            if self.eof {
                return if self.end == 0 {
                    Ok(false)
                } else {
                    Err(Error::malformed(
                        self.offset,
                        "truncated UTF-8 sequence at end of stream",
                    ))
                };
            }

            match self.src.read(&mut self.block[self.end..]) {
                Ok(0) => self.eof = true,
                Ok(n) => self.end += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::io("reading UTF-8 input", e)),
            }
        }
    }
}
