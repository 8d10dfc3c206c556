//! Core definitions shared by all utf16kit-* crates: the error type, the `Result`
//! alias, and the cooperative cancellation primitives.

pub mod cancel;
pub mod error;
pub mod result;

pub use cancel::{CancelReason, CancelSignal, CancellationToken, Never};
pub use result::Result;
