//! Scatter-gather evaluation of a query batch.

use std::time::{Duration, Instant};

use seqlookup_common::{Error, Result};
use seqlookup_query::{Query, QueryResult, Sequence, resolve_query};
use seqlookup_workflow::{data_parallel, thread_pool::ThreadPool};

use crate::BatchOptions;

/// Resolves every query in `queries` against `sequence` on the process-wide pool.
///
/// The returned vector has one result per query, in input order. If resolving any
/// query faults, the whole batch fails with [`ErrorKind::TaskFailed`] and no partial
/// results are returned.
///
/// [`ErrorKind::TaskFailed`]: seqlookup_common::ErrorKind::TaskFailed
pub fn run_batch<T>(sequence: &Sequence<T>, queries: &[Query]) -> Result<Vec<QueryResult<T>>>
where
    T: Clone + Send + Sync + 'static,
{
    BatchRunner::global().run(sequence, queries)
}

/// Evaluates query batches on a fixed-size worker pool.
#[derive(Clone)]
pub struct BatchRunner {
    pool: ThreadPool,
    options: BatchOptions,
}

impl BatchRunner {
    /// Creates a runner with its own pool, sized to the host's parallelism or to
    /// `options.max_parallelism` when that is set.
    pub fn new(options: BatchOptions) -> BatchRunner {
        let pool = match options.max_parallelism {
            Some(n) if n > 0 => ThreadPool::with_thread_name(n, |i| format!("seqlookup-batch-{i}")),
            _ => ThreadPool::with_default_threads(),
        };
        BatchRunner { pool, options }
    }

    /// Creates a runner on an existing pool.
    pub fn with_pool(pool: ThreadPool, options: BatchOptions) -> BatchRunner {
        BatchRunner { pool, options }
    }

    /// A runner on the process-wide pool with default options.
    pub fn global() -> BatchRunner {
        BatchRunner::with_pool(ThreadPool::global().clone(), BatchOptions::default())
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Number of workers this runner fans out to.
    pub fn parallelism(&self) -> usize {
        match self.options.max_parallelism {
            Some(n) => n.clamp(1, self.pool.num_threads()),
            None => self.pool.num_threads(),
        }
    }

    /// Resolves every query against `sequence`, returning results in input order.
    pub fn run<T>(&self, sequence: &Sequence<T>, queries: &[Query]) -> Result<Vec<QueryResult<T>>>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.run_with(sequence, queries, |seq: &[T], query: &Query| {
            let res = resolve_query(seq, query);
            tracing::trace!(%query, token = res.is_token(), "query resolved");
            res
        })
    }

    /// Evaluates `f` for every query under the same contract as [`run`](Self::run):
    /// one task per query, results in input order, and the first faulted task (in
    /// input order) fails the whole batch.
    pub fn run_with<T, F, R>(&self, sequence: &Sequence<T>, queries: &[Query], f: F) -> Result<Vec<R>>
    where
        T: Send + Sync + 'static,
        F: Fn(&[T], &Query) -> R + Send + Sync + 'static,
        R: Send + 'static,
    {
        if queries.is_empty() {
            return Ok(Vec::new());
        }

        let degree = self.options.degree_for(queries.len());
        tracing::debug!(
            queries = queries.len(),
            sequence_len = sequence.len(),
            ?degree,
            "dispatching query batch"
        );

        let sequence = sequence.clone();
        data_parallel::map(&self.pool, degree, queries.to_vec(), move |query| {
            f(&sequence, &query)
        })
        .map_err(|fault| {
            tracing::warn!(index = fault.index, "query batch failed");
            Error::task_failed(fault.index, fault.message)
        })
    }

    /// Like [`run`](Self::run), but pairs every query with its result and records the
    /// wall-clock time spent on the batch.
    pub fn run_report<T>(&self, sequence: &Sequence<T>, queries: Vec<Query>) -> Result<BatchReport<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        let start = Instant::now();
        let results = self.run(sequence, &queries)?;
        let elapsed = start.elapsed();
        Ok(BatchReport {
            entries: queries.into_iter().zip(results).collect(),
            elapsed,
        })
    }
}

/// Queries of a batch paired with their results, plus the batch's wall-clock time.
#[derive(Debug, Clone)]
pub struct BatchReport<T> {
    pub entries: Vec<(Query, QueryResult<T>)>,
    pub elapsed: Duration,
}

impl<T> BatchReport<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of results that are lookup tokens rather than values.
    pub fn token_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_token()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqlookup_common::ErrorKind;
    use seqlookup_query::QueryParam;

    #[test]
    fn test_run_small_batch() {
        let runner = BatchRunner::new(BatchOptions::default().with_max_parallelism(2));
        let seq = Sequence::one_based(3);
        let res = runner
            .run(&seq, &[Query::positional(1i64), Query::circular(5i64)])
            .unwrap();
        assert_eq!(res, vec![QueryResult::Element(2), QueryResult::Element(3)]);
    }

    #[test]
    fn test_parallelism() {
        let pool = ThreadPool::new(4);
        let runner = BatchRunner::with_pool(pool.clone(), BatchOptions::default());
        assert_eq!(runner.parallelism(), 4);

        let runner = BatchRunner::with_pool(pool, BatchOptions::default().with_max_parallelism(16));
        assert_eq!(runner.parallelism(), 4);
    }

    #[test]
    fn test_run_with_fault_fails_batch() {
        let runner = BatchRunner::new(BatchOptions::default().with_max_parallelism(3));
        let seq = Sequence::one_based(10);
        let queries: Vec<Query> = (0..8i64).map(Query::positional).collect();
        let err = runner
            .run_with(&seq, &queries, |seq: &[i64], query: &Query| {
                if query.param == QueryParam::Index(4) {
                    panic!("cannot resolve {query}");
                }
                resolve_query(seq, query)
            })
            .unwrap_err();
        match err.kind() {
            ErrorKind::TaskFailed { index, message } => {
                assert_eq!(*index, 4);
                assert_eq!(message, "cannot resolve (positional, 4)");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_report() {
        let runner = BatchRunner::new(BatchOptions::default());
        let seq = Sequence::one_based(5);
        let report = runner
            .run_report(
                &seq,
                vec![Query::positional(10i64), Query::circular((3i64, 1i64))],
            )
            .unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.token_count(), 1);
        assert_eq!(report.entries[0].1, QueryResult::OutOfRange);
        assert_eq!(report.entries[1].1, QueryResult::Slice(vec![4, 5, 1]));
    }
}
