//! Wordle Openings - CLI
//!
//! Ranks and scores opening guesses for Wordle-like games using a
//! precomputed cross-word hint matrix.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_openings::{
    commands::{evaluate_opening_words, run_compare, run_tier_benchmark, search_best_opening},
    core::WordPool,
    evaluator::EvaluatorTier,
    matrix::BuilderTier,
    output::{
        print_benchmark_report, print_compare_report, print_evaluate_result, print_search_result,
    },
    wordlists::{WORDS_EN_5, loader::load_pool_from_file, pool_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_openings",
    about = "Rank Wordle opening guesses by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file (one word per line)
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Cap the pool at the first N words
    #[arg(short = 'n', long, global = true)]
    pool_size: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a specific opening (one or more words)
    Evaluate {
        /// The opening words
        words: Vec<String>,

        /// Builder tier: reference, bitmap, sets, kernel, parallel
        #[arg(short, long, default_value = "parallel")]
        builder: String,

        /// Evaluator tier: reference, bitmask, kernel, parallel
        #[arg(short, long, default_value = "parallel")]
        evaluator: String,
    },

    /// Search for the best two-word opening
    Search {
        /// Consider only the top N words by raw letter entropy
        #[arg(short, long, default_value = "100")]
        limit: usize,
    },

    /// Time every builder and evaluator tier
    Benchmark {
        /// Opening size used for evaluator timings
        #[arg(short, long, default_value = "2")]
        opening_size: usize,
    },

    /// Verify that all tiers produce equivalent results
    Compare {
        /// Number of random openings to check
        #[arg(short = 'c', long, default_value = "8")]
        openings: usize,
    },
}

/// Load the pool based on the -w and -n flags
fn load_pool(wordlist: &str, pool_size: Option<usize>) -> Result<WordPool> {
    let pool = match wordlist {
        "embedded" => pool_from_slice(WORDS_EN_5),
        path => load_pool_from_file(path)?,
    };

    match pool_size {
        Some(n) if n < pool.len() => {
            let words = pool.words()[..n].to_vec();
            Ok(WordPool::new(words)?)
        }
        _ => Ok(pool),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let pool = load_pool(&cli.wordlist, cli.pool_size)?;

    match cli.command {
        Commands::Evaluate {
            words,
            builder,
            evaluator,
        } => {
            let result = evaluate_opening_words(
                &words,
                &pool,
                BuilderTier::from_name(&builder),
                EvaluatorTier::from_name(&evaluator),
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            print_evaluate_result(&result);
        }
        Commands::Search { limit } => {
            let result =
                search_best_opening(&pool, Some(limit), true).map_err(|e| anyhow::anyhow!(e))?;
            print_search_result(&result);
        }
        Commands::Benchmark { opening_size } => {
            let report = run_tier_benchmark(&pool, opening_size);
            print_benchmark_report(&report);
        }
        Commands::Compare { openings } => {
            // The reference tiers are quadratic; keep the compare pool small
            let capped = if pool.len() > 100 {
                WordPool::new(pool.words()[..100].to_vec())?
            } else {
                pool
            };
            let report = run_compare(&capped, openings).map_err(|e| anyhow::anyhow!(e))?;
            print_compare_report(&report);
        }
    }

    Ok(())
}
