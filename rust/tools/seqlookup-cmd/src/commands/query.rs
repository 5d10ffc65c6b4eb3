//! Query command implementation

use anyhow::{Context, Result};
use seqlookup_query::{Query, Sequence};

use crate::utils::{format_elapsed, runner};

pub fn run(
    len: Option<usize>,
    values: Option<Vec<i64>>,
    threads: Option<usize>,
    queries: Vec<String>,
) -> Result<()> {
    let sequence = match (values, len) {
        (Some(values), _) => Sequence::from(values),
        (None, Some(len)) => Sequence::one_based(len),
        (None, None) => anyhow::bail!("Either --len or --values must be given"),
    };
    let queries = parse_queries(&queries)?;

    let report = runner(threads)
        .run_report(&sequence, queries)
        .context("Query batch failed")?;
    for (query, result) in &report.entries {
        println!("{query} => {result}");
    }
    tracing::info!(elapsed = %format_elapsed(report.elapsed), "batch complete");
    Ok(())
}

fn parse_queries(texts: &[String]) -> Result<Vec<Query>> {
    texts
        .iter()
        .map(|text| {
            text.parse::<Query>()
                .with_context(|| format!("Invalid query: {text}"))
        })
        .collect()
}
