//! Parallel evaluation of query batches against a shared sequence.
//!
//! [`run_batch`] fans every query of a batch out to the process-wide worker pool and
//! returns the results in input order. [`BatchRunner`] does the same with a dedicated
//! pool and explicit [`BatchOptions`]. [`QueryGenerator`] produces random batches for
//! demonstrations and tests.

pub mod options;
pub mod query_gen;
pub mod runner;

pub use options::BatchOptions;
pub use query_gen::{QueryGenerator, query_count_bounds};
pub use runner::{BatchReport, BatchRunner, run_batch};
