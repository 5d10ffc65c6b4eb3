//! Random query batches for demonstrations and tests.
//!
//! Generated parameters are drawn from `[0, 2 * len]`, so they regularly exceed the
//! sequence length and exercise the out-of-range and wraparound paths.

use seqlookup_common::{Result, verify_arg};
use seqlookup_query::{Query, QueryKind, QueryParam};

/// Produces random batches of well-formed queries.
///
/// Every generated query has kind `Positional` or `Circular`, and its parameter is
/// either an index or a range `(start, end)` with `start <= end`.
pub struct QueryGenerator {
    rng: fastrand::Rng,
}

impl QueryGenerator {
    /// A generator seeded from the thread-local entropy source.
    pub fn new() -> QueryGenerator {
        QueryGenerator {
            rng: fastrand::Rng::new(),
        }
    }

    /// A deterministic generator.
    pub fn with_seed(seed: u64) -> QueryGenerator {
        QueryGenerator {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Generates between `min_queries` and `max_queries` (inclusive) queries for a
    /// sequence of `sequence_len` elements.
    pub fn generate(
        &mut self,
        sequence_len: usize,
        min_queries: usize,
        max_queries: usize,
    ) -> Result<Vec<Query>> {
        verify_arg!(min_queries, min_queries <= max_queries);
        let count = self.rng.usize(min_queries..=max_queries);
        Ok((0..count).map(|_| self.query(sequence_len)).collect())
    }

    /// Generates a single query for a sequence of `sequence_len` elements.
    pub fn query(&mut self, sequence_len: usize) -> Query {
        let kind = if self.rng.bool() {
            QueryKind::Positional
        } else {
            QueryKind::Circular
        };
        let bound = i64::try_from(sequence_len)
            .unwrap_or(i64::MAX)
            .saturating_mul(2);
        let param = if self.rng.bool() {
            QueryParam::Index(self.rng.i64(0..=bound))
        } else {
            let start = self.rng.i64(0..=bound);
            let end = self.rng.i64(start..=bound);
            QueryParam::Range(start, end)
        };
        Query { kind, param }
    }
}

impl Default for QueryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Batch size bounds `(min, max)` for a demonstration sequence of `len` elements.
///
/// Roughly one query per ten elements at least and one per five at most, with
/// `(3, 7)` for short sequences. Both bounds are at least 1 and `min <= max`.
pub fn query_count_bounds(len: usize) -> (usize, usize) {
    let min = if len > 10 { len / 10 } else { 3 };
    let max = if len > 5 { len / 5 } else { 7 };
    let min = min.min(max).max(1);
    let max = max.max(min).max(1);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqlookup_common::ErrorKind;

    #[test]
    fn test_generated_queries_are_well_formed() {
        let mut generator = QueryGenerator::with_seed(42);
        for len in [0usize, 1, 5, 10, 100] {
            let bound = 2 * len as i64;
            let queries = generator.generate(len, 3, 7).unwrap();
            assert!((3..=7).contains(&queries.len()));
            for q in queries {
                assert!(matches!(q.kind, QueryKind::Positional | QueryKind::Circular));
                match q.param {
                    QueryParam::Index(i) => assert!((0..=bound).contains(&i)),
                    QueryParam::Range(start, end) => {
                        assert!(0 <= start && start <= end && end <= bound)
                    }
                    QueryParam::Malformed(text) => panic!("malformed query generated: {text}"),
                }
            }
        }
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let a = QueryGenerator::with_seed(7).generate(50, 5, 10).unwrap();
        let b = QueryGenerator::with_seed(7).generate(50, 5, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generator_covers_both_kinds_and_shapes() {
        let mut generator = QueryGenerator::with_seed(1);
        let queries = generator.generate(20, 200, 200).unwrap();
        assert_eq!(queries.len(), 200);
        assert!(queries.iter().any(|q| q.kind == QueryKind::Positional));
        assert!(queries.iter().any(|q| q.kind == QueryKind::Circular));
        assert!(queries.iter().any(|q| matches!(q.param, QueryParam::Index(_))));
        assert!(queries.iter().any(|q| matches!(q.param, QueryParam::Range(..))));
    }

    #[test]
    fn test_generate_rejects_inverted_bounds() {
        let err = QueryGenerator::with_seed(0).generate(10, 5, 2).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }

    #[test]
    fn test_query_count_bounds() {
        assert_eq!(query_count_bounds(0), (3, 7));
        assert_eq!(query_count_bounds(1), (3, 7));
        assert_eq!(query_count_bounds(5), (3, 7));
        assert_eq!(query_count_bounds(10), (2, 2));
        assert_eq!(query_count_bounds(20), (2, 4));
        assert_eq!(query_count_bounds(100), (10, 20));
        assert_eq!(query_count_bounds(1000), (100, 200));
    }
}
