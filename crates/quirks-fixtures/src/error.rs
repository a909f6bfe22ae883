//! Fixture error types.

use std::time::Duration;

/// Errors from [`run_within`](crate::run_within).
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The worker thread did not produce a value before the deadline.
    #[error("worker did not finish within {0:?}")]
    Timeout(Duration),

    /// The worker thread panicked before producing a value.
    #[error("worker panicked")]
    Panicked,
}
