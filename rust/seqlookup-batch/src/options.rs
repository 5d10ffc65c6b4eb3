/// Tuning knobs of a [`BatchRunner`](crate::BatchRunner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Maximum number of queries in flight at once. `None` uses every worker of the
    /// pool; `Some(1)` (or `Some(0)`) evaluates the batch on the caller's thread.
    pub max_parallelism: Option<usize>,
    /// Batches with at most this many queries are evaluated on the caller's thread.
    /// The default of 0 dispatches every query, even a lone one, to a pool worker.
    pub sequential_threshold: usize,
}

impl BatchOptions {
    pub fn with_max_parallelism(mut self, max_parallelism: usize) -> Self {
        self.max_parallelism = Some(max_parallelism);
        self
    }

    pub fn with_sequential_threshold(mut self, sequential_threshold: usize) -> Self {
        self.sequential_threshold = sequential_threshold;
        self
    }

    /// Degree of parallelism to use for a batch of `batch_len` queries.
    pub(crate) fn degree_for(&self, batch_len: usize) -> Option<usize> {
        if batch_len <= self.sequential_threshold {
            Some(1)
        } else {
            self.max_parallelism
        }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            max_parallelism: None,
            sequential_threshold: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_for() {
        let options = BatchOptions::default();
        assert_eq!(options.degree_for(0), Some(1));
        assert_eq!(options.degree_for(1), None);
        assert_eq!(options.degree_for(2), None);

        let options = BatchOptions::default()
            .with_max_parallelism(3)
            .with_sequential_threshold(10);
        assert_eq!(options.degree_for(10), Some(1));
        assert_eq!(options.degree_for(11), Some(3));
    }
}
