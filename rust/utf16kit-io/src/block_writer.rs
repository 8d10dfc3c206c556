//! Block-buffered output with explicit delivery control.

use std::io::Write;

/// Buffers output in blocks over a `std::io::Write` destination.
///
/// Unlike `std::io::BufWriter`, pending bytes are never written implicitly on
/// drop: they reach the destination only when a block fills up, or through
/// [`release`](Self::release) (write, no flush) or [`finish`](Self::finish)
/// (write, then flush). Dropping the writer discards whatever is pending. A block
/// whose write fails is dropped as well, so it is never written twice.
pub struct BlockWriter<W: Write> {
    inner: W,
    buffer: Vec<u8>,
    capacity: usize,
    delivered: u64,
}

impl<W: Write> BlockWriter<W> {
    pub fn new(inner: W, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        BlockWriter {
            inner,
            buffer: Vec::with_capacity(capacity),
            capacity,
            delivered: 0,
        }
    }

    /// Appends `bytes`, writing full blocks through to the destination.
    pub fn write_all(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        if self.buffer.len() + bytes.len() > self.capacity {
            self.drain()?;
        }
        if bytes.len() >= self.capacity {
            self.inner.write_all(bytes)?;
            self.delivered += bytes.len() as u64;
        } else {
            self.buffer.extend_from_slice(bytes);
        }
        Ok(())
    }

    /// Bytes accepted but not yet handed to the destination.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of bytes handed to the destination so far.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Total number of bytes accepted, delivered or pending.
    pub fn total(&self) -> u64 {
        self.delivered + self.buffer.len() as u64
    }

    /// Writes pending bytes to the destination without flushing it.
    pub fn release(mut self) -> std::io::Result<W> {
        self.drain()?;
        Ok(self.inner)
    }

    /// Writes pending bytes and flushes the destination.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.drain()?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    /// Drops pending bytes and returns the destination.
    pub fn discard(self) -> W {
        self.inner
    }

    fn drain(&mut self) -> std::io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let result = self.inner.write_all(&self.buffer);
        if result.is_ok() {
            self.delivered += self.buffer.len() as u64;
        }
        self.buffer.clear();
        result
    }
}

impl<W: Write> Write for BlockWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        BlockWriter::write_all(self, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::BlockWriter;

    /// Records writes and flushes separately.
    #[derive(Default)]
    struct Recorder {
        written: Vec<u8>,
        flushes: usize,
    }

    impl Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_blocks_fill_and_drain() {
        let mut rec = Recorder::default();
        let mut writer = BlockWriter::new(&mut rec, 4);
        writer.write_all(b"ab").unwrap();
        writer.write_all(b"cd").unwrap();
        assert_eq!(writer.delivered(), 0);
        assert_eq!(writer.pending(), b"abcd");
        writer.write_all(b"e").unwrap();
        assert_eq!(writer.delivered(), 4);
        assert_eq!(writer.pending(), b"e");
        writer.write_all(b"123456").unwrap();
        assert_eq!(writer.delivered(), 11);
        assert_eq!(writer.total(), 11);
        writer.finish().unwrap();
        assert_eq!(rec.written, b"abcde123456");
        assert_eq!(rec.flushes, 1);
    }

    #[test]
    fn test_release_does_not_flush() {
        let mut rec = Recorder::default();
        let mut writer = BlockWriter::new(&mut rec, 16);
        writer.write_all(b"xyz").unwrap();
        writer.release().unwrap();
        assert_eq!(rec.written, b"xyz");
        assert_eq!(rec.flushes, 0);
    }

    #[test]
    fn test_drop_discards_pending() {
        let mut rec = Recorder::default();
        {
            let mut writer = BlockWriter::new(&mut rec, 16);
            writer.write_all(b"lost").unwrap();
        }
        let mut writer = BlockWriter::new(&mut rec, 16);
        writer.write_all(b"gone").unwrap();
        writer.discard();
        assert!(rec.written.is_empty());
        assert_eq!(rec.flushes, 0);
    }

    #[test]
    fn test_failed_block_is_not_retried() {
        struct FailOnce {
            failed: bool,
            written: Vec<u8>,
        }
        impl Write for FailOnce {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                if !std::mem::replace(&mut self.failed, true) {
                    return Err(std::io::Error::other("transient"));
                }
                self.written.extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut dst = FailOnce {
            failed: false,
            written: Vec::new(),
        };
        let mut writer = BlockWriter::new(&mut dst, 4);
        writer.write_all(b"abc").unwrap();
        assert!(writer.write_all(b"de").is_err());
        assert!(writer.pending().is_empty());
        assert_eq!(writer.delivered(), 0);
        writer.write_all(b"f").unwrap();
        writer.release().unwrap();
        assert_eq!(dst.written, b"f");
    }

    #[test]
    fn test_as_io_write() {
        let mut rec = Recorder::default();
        let mut writer = BlockWriter::new(&mut rec, 8);
        write!(writer, "{}-{}", 12, "ab").unwrap();
        assert_eq!(writer.pending(), b"12-ab");
        Write::flush(&mut writer).unwrap();
        assert_eq!(writer.delivered(), 5);
        drop(writer);
        assert_eq!(rec.written, b"12-ab");
        assert_eq!(rec.flushes, 1);
    }
}
