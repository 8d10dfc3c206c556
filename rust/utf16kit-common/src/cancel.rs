//! Cooperative cancellation.
//!
//! Conversions poll a [`CancelSignal`] once before each scalar value they convert.
//! Nothing is preempted: a signal that fires while a code unit is being decoded
//! is observed at the start of the next iteration.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

/// Why a cancellation signal fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The signal was triggered explicitly.
    Cancelled,
    /// The signal's deadline has passed.
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Cancelled => f.write_str("cancelled"),
            CancelReason::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

/// A source of cancellation that a long-running operation polls.
pub trait CancelSignal {
    /// Returns `Some(reason)` once the operation should stop, `None` otherwise.
    fn check(&self) -> Option<CancelReason>;

    fn is_cancelled(&self) -> bool {
        self.check().is_some()
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for &T {
    fn check(&self) -> Option<CancelReason> {
        (**self).check()
    }
}

/// A signal that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl CancelSignal for Never {
    #[inline]
    fn check(&self) -> Option<CancelReason> {
        None
    }
}

/// A cloneable cancellation token with an optional deadline.
///
/// All clones share the same flag: calling [`cancel`](Self::cancel) on any of
/// them is observed by every holder. The deadline is per-clone and is fixed at
/// construction.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// Creates a token that only fires when [`cancel`](Self::cancel) is called.
    pub fn new() -> CancellationToken {
        CancellationToken::default()
    }

    /// Creates a token that fires at `deadline`, or earlier if cancelled.
    pub fn with_deadline(deadline: Instant) -> CancellationToken {
        CancellationToken {
            flag: Default::default(),
            deadline: Some(deadline),
        }
    }

    /// Creates a token that fires once `timeout` has elapsed from now.
    pub fn with_timeout(timeout: Duration) -> CancellationToken {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => CancellationToken::with_deadline(deadline),
            None => CancellationToken::new(),
        }
    }

    /// Triggers the token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }
}

impl CancelSignal for CancellationToken {
    fn check(&self) -> Option<CancelReason> {
        if self.flag.load(Ordering::Acquire) {
            return Some(CancelReason::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(CancelReason::DeadlineExceeded),
            _ => None,
        }
    }
}
