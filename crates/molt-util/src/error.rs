//! Errors from the helper functions.

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Errors from [`partition`](crate::partition) and
/// [`with_timeout`](crate::with_timeout).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UtilError {
    /// A batch size of zero was requested.
    ZeroBatchSize,
    /// The task did not finish before the deadline.
    TimedOut {
        /// The deadline that elapsed.
        after: Duration,
    },
    /// The worker thread exited without producing a result (it panicked).
    WorkerLost,
    /// The worker thread could not be spawned.
    ThreadSpawnFailed {
        /// The OS error message.
        reason: String,
    },
}

impl fmt::Display for UtilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBatchSize => write!(f, "batch size must be at least 1"),
            Self::TimedOut { after } => write!(f, "task timed out after {after:?}"),
            Self::WorkerLost => write!(f, "worker thread exited without a result"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
        }
    }
}

impl Error for UtilError {}
