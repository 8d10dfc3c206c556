//! A buffered sequential reader that tracks the logical read position.

use std::io::{BufRead, Read};

/// Default block size for reads from the underlying source.
pub const DEFAULT_BLOCK_SIZE: usize = 8192;

/// A buffered reader over any `std::io::Read` that reports how many bytes the
/// caller has consumed.
///
/// The position counts bytes handed out through `Read` or released with
/// `BufRead::consume`, not bytes pulled from the source: read-ahead sitting in
/// the internal block does not move it. This makes destructive peeks observable,
/// e.g. after BOM detection the position is exactly 2.
pub struct ReadCursor<R> {
    inner: R,
    buffer: Box<[u8]>,
    start: usize,
    end: usize,
    pos: u64,
}

impl<R: Read> ReadCursor<R> {
    /// Creates a cursor with the default block size.
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, DEFAULT_BLOCK_SIZE)
    }

    /// Creates a cursor that reads from the source in blocks of `capacity` bytes.
    pub fn with_capacity(inner: R, capacity: usize) -> Self {
        ReadCursor {
            inner,
            buffer: vec![0u8; capacity.max(1)].into_boxed_slice(),
            start: 0,
            end: 0,
            pos: 0,
        }
    }
}

impl<R> ReadCursor<R> {
    /// Returns the number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.pos
    }
}

impl<R: Read> Read for ReadCursor<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        // Large reads with nothing pending bypass the block.
        if self.start == self.end && buf.len() >= self.buffer.len() {
            let n = self.inner.read(buf)?;
            self.pos += n as u64;
            return Ok(n);
        }
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl<R: Read> BufRead for ReadCursor<R> {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        if self.start == self.end {
            self.start = 0;
            self.end = 0;
            let n = loop {
                match self.inner.read(&mut self.buffer) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(e),
                }
            };
            self.end = n;
        }
        Ok(&self.buffer[self.start..self.end])
    }

    fn consume(&mut self, amt: usize) {
        let amt = amt.min(self.end - self.start);
        self.start += amt;
        self.pos += amt as u64;
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, Read};

    use super::ReadCursor;

    #[test]
    fn test_position_tracks_consumed_bytes() {
        let mut cursor = ReadCursor::with_capacity(&b"abcdefg"[..], 4);
        let mut two = [0u8; 2];
        cursor.read_exact(&mut two).unwrap();
        assert_eq!(&two, b"ab");
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.fill_buf().unwrap(), b"cd");

        let mut rest = Vec::new();
        cursor.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"cdefg");
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn test_buf_read_consume() {
        let mut cursor = ReadCursor::with_capacity(&b"0123456789"[..], 3);
        assert_eq!(cursor.fill_buf().unwrap(), b"012");
        assert_eq!(cursor.position(), 0);
        cursor.consume(2);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.fill_buf().unwrap(), b"2");
        cursor.consume(10);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.fill_buf().unwrap(), b"345");
    }

    #[test]
    fn test_large_read_bypass() {
        let mut cursor = ReadCursor::with_capacity(&b"abcdef"[..], 2);
        let mut buf = [0u8; 8];
        let n = cursor.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"abcdef");
        assert_eq!(cursor.position(), 6);
        assert_eq!(cursor.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_file_source() {
        use std::io::{Seek, Write};

        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"\xFF\xFEh\x00").unwrap();
        file.rewind().unwrap();

        let mut cursor = ReadCursor::new(file);
        let mut bom = [0u8; 2];
        cursor.read_exact(&mut bom).unwrap();
        assert_eq!(bom, [0xFF, 0xFE]);
        assert_eq!(cursor.position(), 2);
    }
}
