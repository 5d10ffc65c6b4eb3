use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod utils;

#[derive(Parser)]
#[command(name = "seqlookup-cmd")]
#[command(about = "Run positional and circular lookups against sample sequences")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random query batches for sequences 1..=N and run them in parallel
    Demo {
        /// Sequence lengths to demonstrate (comma separated)
        #[arg(long, value_delimiter = ',', default_values_t = [1usize, 5, 10, 20, 100, 500, 1000])]
        lengths: Vec<usize>,

        /// Seed for the query generator (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Worker threads to use (defaults to the host's parallelism)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Resolve explicit queries, written as <kind>:<param> (e.g. circular:3..1)
    Query {
        /// Query the sequence 1..=LEN
        #[arg(long, conflicts_with = "values", required_unless_present = "values")]
        len: Option<usize>,

        /// Query these integer values instead (comma separated)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        values: Option<Vec<i64>>,

        /// Worker threads to use (defaults to the host's parallelism)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Queries to resolve
        #[arg(required = true, allow_hyphen_values = true)]
        queries: Vec<String>,
    },
}

fn main() -> Result<()> {
    logging::init()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            lengths,
            seed,
            threads,
        } => commands::demo::run(lengths, seed, threads),
        Commands::Query {
            len,
            values,
            threads,
            queries,
        } => commands::query::run(len, values, threads, queries),
    }
}
