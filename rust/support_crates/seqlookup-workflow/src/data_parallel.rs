//! Order-preserving parallel map over independent work items.
//!
//! [`map`] scatters one task per item onto a [`ThreadPool`] and gathers the outcomes
//! in input order, regardless of the order in which tasks complete. It falls back to
//! sequential execution on the caller's thread for empty inputs or when the degree of
//! parallelism is restricted to one. A single item still goes to a pool worker.
//!
//! The map is all-or-nothing: the first faulted item (in input order) aborts the
//! gather and is reported as a [`TaskFault`]; no partial output is returned.

use std::{
    collections::VecDeque,
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use crate::{
    join_handle::{JoinHandle, panic_message},
    thread_pool::ThreadPool,
};

/// Describes the work item whose evaluation panicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFault {
    /// Position of the faulted item in the input.
    pub index: usize,
    /// Panic message of the faulted item.
    pub message: String,
}

impl fmt::Display for TaskFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "work item #{} panicked: {}", self.index, self.message)
    }
}

impl std::error::Error for TaskFault {}

/// Maps `f` over `items`, in parallel on `pool`, returning results in input order.
///
/// # Arguments
///
/// * `pool` - The pool whose workers evaluate the items.
/// * `max_degree` - Optional cap on the number of items in flight at once. `None`
///   means "as many as the pool has workers". A cap of 1 or less forces sequential
///   execution on the caller's thread.
/// * `items` - The work items.
/// * `f` - The function applied to each item. It is shared by all workers.
///
/// # Behavior
///
/// - At most `max_degree` (or `pool.num_threads()`) items are in flight; when the
///   window is full, the oldest in-flight item is joined before the next is submitted.
/// - The output has exactly one entry per input item, in input order.
/// - If any item panics, returns the [`TaskFault`] of the first faulted item in input
///   order. Items already dispatched keep running to completion in the background.
pub fn map<T, F, R>(
    pool: &ThreadPool,
    max_degree: Option<usize>,
    items: impl IntoIterator<Item = T>,
    f: F,
) -> Result<Vec<R>, TaskFault>
where
    T: Send + 'static,
    F: Fn(T) -> R + Send + Sync + 'static,
    R: Send + 'static,
{
    let items = items.into_iter();
    let window = max_degree.unwrap_or(pool.num_threads()).min(pool.num_threads());
    let mut results = Vec::with_capacity(items.size_hint().0);

    if items.size_hint().1 == Some(0) || window <= 1 {
        for (index, item) in items.enumerate() {
            let res = panic::catch_unwind(AssertUnwindSafe(|| f(item)))
                .map_err(|payload| fault(index, payload))?;
            results.push(res);
        }
        return Ok(results);
    }

    tracing::trace!(window, "parallel map dispatch");
    let f = Arc::new(f);
    let mut in_flight: VecDeque<JoinHandle<R>> = VecDeque::with_capacity(window);
    for item in items {
        if in_flight.len() == window {
            gather_one(&mut in_flight, &mut results)?;
        }
        let f = Arc::clone(&f);
        in_flight.push_back(pool.spawn(move || f(item)));
    }
    while !in_flight.is_empty() {
        gather_one(&mut in_flight, &mut results)?;
    }
    Ok(results)
}

/// Joins the oldest in-flight handle and appends its result.
fn gather_one<R>(
    in_flight: &mut VecDeque<JoinHandle<R>>,
    results: &mut Vec<R>,
) -> Result<(), TaskFault> {
    if let Some(handle) = in_flight.pop_front() {
        let index = results.len();
        let res = handle.join().map_err(|payload| fault(index, payload))?;
        results.push(res);
    }
    Ok(())
}

fn fault(index: usize, payload: Box<dyn std::any::Any + Send>) -> TaskFault {
    let fault = TaskFault {
        index,
        message: panic_message(payload.as_ref()),
    };
    tracing::warn!(index, message = %fault.message, "work item faulted");
    fault
}
