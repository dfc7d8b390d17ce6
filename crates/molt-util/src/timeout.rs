//! Run a task with a deadline.

use crossbeam_channel::RecvTimeoutError;
use std::thread;
use std::time::Duration;

use crate::error::UtilError;

/// Run `task` on a worker thread and wait at most `limit` for its result.
///
/// On timeout the worker is detached: it keeps running to completion and
/// its result is discarded.
///
/// # Errors
///
/// - [`UtilError::TimedOut`] if `limit` elapses first.
/// - [`UtilError::WorkerLost`] if `task` panics.
/// - [`UtilError::ThreadSpawnFailed`] if no thread could be started.
///
/// ```
/// use molt_util::with_timeout;
/// use std::time::Duration;
///
/// let answer = with_timeout(Duration::from_secs(5), || 6 * 7).unwrap();
/// assert_eq!(answer, 42);
/// ```
pub fn with_timeout<T, F>(limit: Duration, task: F) -> Result<T, UtilError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
    thread::Builder::new()
        .name("molt-timeout".into())
        .spawn(move || {
            // The receiver is gone if the deadline already passed.
            let _ = reply_tx.send(task());
        })
        .map_err(|e| UtilError::ThreadSpawnFailed {
            reason: e.to_string(),
        })?;

    match reply_rx.recv_timeout(limit) {
        Ok(value) => Ok(value),
        Err(RecvTimeoutError::Timeout) => Err(UtilError::TimedOut { after: limit }),
        Err(RecvTimeoutError::Disconnected) => Err(UtilError::WorkerLost),
    }
}
