//! Stream plumbing for the transcoders:
//! - `ReadCursor`: a sequential reader that tracks how many bytes have been consumed,
//!   so destructive peeks (such as BOM detection) leave an observable position.
//! - `BlockWriter`: fixed-size block buffering over any `std::io::Write`, with
//!   explicit control over when pending bytes reach the destination and when the
//!   destination is flushed.

pub mod block_writer;
pub mod cursor;
pub mod utils;

pub use block_writer::BlockWriter;
pub use cursor::ReadCursor;
pub use utils::read_fully;
