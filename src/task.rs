//! Polling tokio tasks from the egui frame loop

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Outcome of polling a background task once
pub enum PollResult<T> {
    /// Nothing in flight
    NoTask,
    /// Still running; the caller should request a repaint
    Pending,
    /// Finished. The handle has been taken, so the slot is empty again.
    Complete(Result<T, JoinError>),
}

/// Check an optional task slot without blocking the UI thread.
///
/// The handle is only taken out of `task` once it reports finished, so a
/// `Complete` result is returned exactly once per spawned task.
pub fn poll_task<T>(task: &mut Option<JoinHandle<T>>) -> PollResult<T> {
    match task {
        None => return PollResult::NoTask,
        Some(handle) if !handle.is_finished() => return PollResult::Pending,
        Some(_) => {}
    }

    let Some(mut handle) = task.take() else {
        return PollResult::NoTask;
    };
    match (&mut handle).now_or_never() {
        Some(result) => PollResult::Complete(result),
        None => {
            tracing::warn!("Task not ready despite is_finished()");
            *task = Some(handle);
            PollResult::Pending
        }
    }
}
