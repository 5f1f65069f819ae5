//! Opening evaluation command
//!
//! Scores a user-supplied set of opening words against a pool.

use crate::core::WordPool;
use crate::evaluator::{EvaluatorTier, OpeningScore};
use crate::matrix::BuilderTier;
use std::time::{Duration, Instant};

/// Result of evaluating one opening
pub struct EvaluateResult {
    pub words: Vec<String>,
    pub indices: Vec<usize>,
    pub pool_size: usize,
    pub score: OpeningScore,
    pub build_time: Duration,
    pub eval_time: Duration,
}

/// Evaluate an opening given as word strings
///
/// Builds the hint matrix with the requested builder tier, then scores the
/// opening with the requested evaluator tier.
///
/// # Errors
///
/// Returns an error if:
/// - Any word is not present in the pool
/// - Evaluation fails (out-of-range index or invariant violation)
pub fn evaluate_opening_words(
    words: &[String],
    pool: &WordPool,
    builder: BuilderTier,
    evaluator: EvaluatorTier,
) -> Result<EvaluateResult, String> {
    let indices = words
        .iter()
        .map(|word| {
            pool.index_of(word)
                .ok_or_else(|| format!("Word '{word}' not in word pool"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let build_start = Instant::now();
    let matrix = builder.build(pool);
    let build_time = build_start.elapsed();

    let eval_start = Instant::now();
    let score = evaluator
        .evaluate(pool, &matrix, &indices)
        .map_err(|e| e.to_string())?;
    let eval_time = eval_start.elapsed();

    Ok(EvaluateResult {
        words: words.iter().map(|w| w.to_uppercase()).collect(),
        indices,
        pool_size: pool.len(),
        score,
        build_time,
        eval_time,
    })
}
