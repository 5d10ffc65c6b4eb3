//! Demo command implementation

use anyhow::{Context, Result};
use seqlookup_batch::{QueryGenerator, query_count_bounds};
use seqlookup_query::Sequence;

use crate::utils::{format_elapsed, preview, runner};

const PREVIEW_LIMIT: usize = 20;

pub fn run(lengths: Vec<usize>, seed: Option<u64>, threads: Option<usize>) -> Result<()> {
    let runner = runner(threads);
    let mut generator = seed.map_or_else(QueryGenerator::new, QueryGenerator::with_seed);
    tracing::info!(parallelism = runner.parallelism(), ?seed, "starting demo");

    for len in lengths {
        let sequence = Sequence::one_based(len);
        println!();
        println!("{}", "=".repeat(56));
        println!("Sequence of length {len}: {}", preview(&sequence, PREVIEW_LIMIT));
        println!("{}", "-".repeat(56));

        let (min_queries, max_queries) = query_count_bounds(len);
        let queries = generator
            .generate(len, min_queries, max_queries)
            .with_context(|| format!("Failed to generate queries for length {len}"))?;

        println!("Running {} queries in parallel...", queries.len());
        let report = runner
            .run_report(&sequence, queries)
            .with_context(|| format!("Query batch failed for length {len}"))?;

        println!();
        println!("Results:");
        for (i, (query, result)) in report.entries.iter().enumerate() {
            println!("Query {}: {query}, Result: {result}", i + 1);
        }
        println!();
        println!(
            "Elapsed: {} ({} of {} results are lookup tokens)",
            format_elapsed(report.elapsed),
            report.token_count(),
            report.len()
        );
    }
    Ok(())
}
