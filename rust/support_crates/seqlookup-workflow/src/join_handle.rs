//! Join handles for tasks submitted to a [`ThreadPool`](crate::thread_pool::ThreadPool).
//!
//! A [`JoinHandle`] receives exactly one message from its task: either the task's return
//! value or the payload of the panic that aborted it. The outcome is surfaced as a
//! [`std::thread::Result`], mirroring [`std::thread::JoinHandle::join`].

use std::any::Any;

use crossbeam::channel::{self, Receiver, Sender};

/// A handle for waiting on the outcome of a pooled task.
///
/// ## Lifecycle
///
/// 1. **Created**: When a task is spawned, a `JoinHandle` is returned
/// 2. **Pending**: The task is running or queued for execution
/// 3. **Done**: The task has completed (or panicked) and its outcome is buffered
/// 4. **Consumed**: The outcome has been retrieved via [`join()`](Self::join)
pub struct JoinHandle<R>(Receiver<std::thread::Result<R>>);

impl<R> JoinHandle<R> {
    /// Creates a connected (sender, handle) pair. The task side owns the sender.
    pub(crate) fn pair() -> (Sender<std::thread::Result<R>>, JoinHandle<R>) {
        let (tx, rx) = channel::bounded(1);
        (tx, JoinHandle(rx))
    }

    /// Waits for the task to finish and returns its outcome.
    ///
    /// Returns `Err` with the panic payload if the task panicked, or with a synthetic
    /// payload if the task was dropped without ever running (e.g. the pool shut down).
    pub fn join(self) -> std::thread::Result<R> {
        match self.0.recv() {
            Ok(outcome) => outcome,
            Err(_) => Err(Box::new("task was dropped before completion")),
        }
    }
}

/// Extracts a readable message from a panic payload.
///
/// Payloads produced by `panic!` carry either a `&'static str` or a `String`; anything
/// else is reported generically.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
