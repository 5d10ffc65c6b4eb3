//! Fixed-size thread pool for concurrent task execution.
//!
//! Tasks are distributed to workers through a shared multi-producer, multi-consumer
//! queue. Each task runs under [`std::panic::catch_unwind`]: a panicking task delivers
//! its payload to its [`JoinHandle`] and the worker moves on to the next task.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use crossbeam::channel::{self, Receiver, Sender};

use crate::join_handle::JoinHandle;

/// A fixed-size pool of worker threads.
///
/// ## Cloning
///
/// `ThreadPool` implements [`Clone`] and all clones share the same workers. The
/// workers exit once every clone has been dropped and the queue has drained.
#[derive(Clone)]
pub struct ThreadPool {
    tx: Sender<TaskFn>,
    num_threads: usize,
}

/// A boxed function that can be executed by a worker thread.
type TaskFn = Box<dyn FnOnce() + Send + 'static>;

impl ThreadPool {
    /// Creates a new `ThreadPool` with the specified number of worker threads.
    ///
    /// # Panics
    ///
    /// Panics if `num_threads` is 0.
    pub fn new(num_threads: usize) -> Self {
        Self::with_thread_name(num_threads, |_| String::new())
    }

    /// Creates a new `ThreadPool` whose workers are named by `thread_name(index)`.
    ///
    /// An empty name leaves the thread unnamed.
    ///
    /// # Panics
    ///
    /// Panics if `num_threads` is 0 or the OS refuses to spawn a thread.
    pub fn with_thread_name(num_threads: usize, thread_name: impl Fn(usize) -> String) -> Self {
        assert_ne!(num_threads, 0);

        let (tx, rx) = channel::unbounded::<TaskFn>();
        for i in 0..num_threads {
            let rx = rx.clone();
            let mut builder = thread::Builder::new();
            let name = thread_name(i);
            if !name.is_empty() {
                builder = builder.name(name);
            }
            builder
                .spawn(move || Self::thread_fn(rx))
                .expect("spawn thread");
        }
        tracing::debug!(num_threads, "thread pool started");

        ThreadPool { tx, num_threads }
    }

    /// Creates a pool with one worker per available execution unit on the host,
    /// or 8 workers if that cannot be determined.
    pub fn with_default_threads() -> Self {
        Self::with_thread_name(default_parallelism(), |i| format!("seqlookup-worker-{i}"))
    }

    /// Configures the size of the global pool.
    ///
    /// Only effective before the first call to [`global()`](Self::global). Values less
    /// than 1 are clamped to 1.
    pub fn configure_global_pool_size(pool_size: usize) {
        let pool_size = pool_size.max(1);
        GLOBAL_POOL_SIZE.store(pool_size, Ordering::SeqCst);
    }

    /// Returns the lazily initialized process-wide pool.
    ///
    /// Its size is the value passed to
    /// [`configure_global_pool_size()`](Self::configure_global_pool_size) if any, otherwise
    /// the host's available parallelism.
    pub fn global() -> &'static ThreadPool {
        static POOL: OnceLock<ThreadPool> = OnceLock::new();
        POOL.get_or_init(|| {
            let size = match GLOBAL_POOL_SIZE.load(Ordering::SeqCst) {
                0 => default_parallelism(),
                size => size,
            };
            ThreadPool::with_thread_name(size, |i| format!("seqlookup-global-{i}"))
        })
    }

    /// Number of worker threads in this pool.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Spawns a task on the pool and returns a handle for its outcome.
    ///
    /// If `f` panics, the handle's [`join`](JoinHandle::join) returns the panic payload.
    pub fn spawn<F, R>(&self, f: F) -> JoinHandle<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (tx_result, handle) = JoinHandle::pair();
        self.spawn_detached(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(f));
            let _ = tx_result.send(outcome); // Receiver may have been dropped
        });
        handle
    }

    /// Spawns a task without a way to wait for it.
    pub fn spawn_detached<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.tx
            .send(Box::new(f))
            .expect("must have listening worker threads");
    }

    fn thread_fn(rx: Receiver<TaskFn>) {
        while let Ok(task) = rx.recv() {
            // Detached tasks are not wrapped by `spawn`; keep the worker alive regardless.
            if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
                tracing::warn!("detached task panicked");
            }
        }
    }
}

impl Default for ThreadPool {
    fn default() -> Self {
        Self::with_default_threads()
    }
}

/// Number of execution units available to this process, falling back to 8.
pub fn default_parallelism() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(8)
}

/// Configured size of the global pool; 0 means "use the host's parallelism".
static GLOBAL_POOL_SIZE: AtomicUsize = AtomicUsize::new(0);
