//! Cooperative cancellation for long running searches.
//!
//! Searches poll an [`Interrupt`] between candidate evaluations and between
//! forcing rounds. A triggered interrupt aborts the search with a
//! [`GrinError::Search`] error; partial results are never returned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::errors::{ErrorInfo, GrinError};

/// Polled by searches to decide whether to keep going.
pub trait Interrupt: Send + Sync {
    /// Returns an error once the computation should stop.
    fn check(&self) -> Result<(), GrinError>;
}

/// Interrupt that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl Interrupt for Unbounded {
    fn check(&self) -> Result<(), GrinError> {
        Ok(())
    }
}

/// Shared cancellation flag with an optional wall clock deadline.
///
/// Clones share the same flag, so a token handed to a worker can be cancelled
/// from the owning thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// Creates a token without a deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a token that fires once `budget` has elapsed from now.
    pub fn with_time_limit(budget: Duration) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: Instant::now().checked_add(budget),
        }
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl Interrupt for CancelToken {
    fn check(&self) -> Result<(), GrinError> {
        if self.is_cancelled() {
            return Err(GrinError::Search(ErrorInfo::new(
                "cancelled",
                "search cancelled by caller",
            )));
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(GrinError::Search(
                    ErrorInfo::new("deadline-exceeded", "search exceeded its time limit")
                        .with_hint("raise time_limit_ms or switch to the ilp method"),
                ));
            }
        }
        Ok(())
    }
}
