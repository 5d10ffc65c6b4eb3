//! Parallel execution utilities for fanning independent work items out to worker threads.
//!
//! # Key Components
//!
//! - [`thread_pool::ThreadPool`] - A fixed-size pool of worker threads fed from a shared
//!   multi-consumer queue. Panics inside tasks are caught, so a faulted task never takes
//!   its worker down with it.
//! - [`join_handle::JoinHandle`] - A handle for waiting on a single task's outcome.
//! - [`data_parallel`] - An order-preserving parallel `map` (scatter-gather) with
//!   sequential fallback for small inputs or a parallelism limit of one.

pub mod data_parallel;
pub mod join_handle;
pub mod thread_pool;
