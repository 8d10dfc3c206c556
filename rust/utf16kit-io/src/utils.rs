/// Reads from `read` until `buffer` is full or end of stream is reached.
///
/// Returns the number of bytes placed in `buffer`; a value below `buffer.len()`
/// means the stream ended. `Interrupted` errors are retried.
pub fn read_fully<R: std::io::Read + ?Sized>(
    read: &mut R,
    buffer: &mut [u8],
) -> std::io::Result<usize> {
    let mut pos: usize = 0;
    while pos < buffer.len() {
        match read.read(&mut buffer[pos..]) {
            Ok(0) => return Ok(pos),
            Ok(bytes) => pos += bytes,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(pos)
}
