//! Common utilities for seqlookup-cmd

use std::{fmt::Display, time::Duration};

use itertools::Itertools;
use seqlookup_batch::{BatchOptions, BatchRunner};

/// Renders at most `limit` leading elements, eliding the rest.
pub fn preview<T: Display>(values: &[T], limit: usize) -> String {
    if values.len() <= limit {
        format!("[{}]", values.iter().join(", "))
    } else {
        format!(
            "[{}, ... ({} more)]",
            values[..limit].iter().join(", "),
            values.len() - limit
        )
    }
}

/// Formats a wall-clock duration in seconds with four decimals.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.4} s", elapsed.as_secs_f64())
}

/// A runner on the global pool, or on a dedicated pool of `threads` workers.
pub fn runner(threads: Option<usize>) -> BatchRunner {
    match threads {
        Some(threads) => BatchRunner::new(BatchOptions::default().with_max_parallelism(threads)),
        None => BatchRunner::global(),
    }
}
