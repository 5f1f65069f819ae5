//! Tier benchmark command
//!
//! Times every builder and evaluator tier on a pool and cross-checks their
//! outputs while doing so.

use crate::core::WordPool;
use crate::evaluator::{EvaluatorTier, OpeningScore};
use crate::matrix::{BuilderTier, HintMatrix, build_hint_matrix_parallel};
use rand::seq::index::sample;
use std::time::{Duration, Instant};

/// Reference tiers are quadratic with a heavy constant; skip them on pools
/// larger than this
pub const REFERENCE_GATE: usize = 100;

/// Relative tolerance for cross-tier score agreement
pub const SCORE_REL_TOL: f64 = 1e-5;

/// Timing and verification outcome for one tier
pub struct TierTiming {
    pub tier: &'static str,
    pub duration: Duration,
    /// None when the tier was skipped (reference gate)
    pub verified: Option<bool>,
}

/// Full report for one pool size
pub struct BenchmarkReport {
    pub pool_size: usize,
    pub word_len: usize,
    pub opening_size: usize,
    pub builder_timings: Vec<TierTiming>,
    pub evaluator_timings: Vec<TierTiming>,
    pub all_verified: bool,
}

/// Time all builder and evaluator tiers on `pool`
///
/// Builder outputs are verified against the first tier that runs; evaluator
/// scores against the first evaluator that runs, within relative tolerance.
/// The opening used for evaluator timings is sampled at random.
pub fn run_tier_benchmark(pool: &WordPool, opening_size: usize) -> BenchmarkReport {
    let mut builder_timings = Vec::new();
    let mut baseline_matrix: Option<HintMatrix> = None;

    for tier in BuilderTier::ALL {
        if tier == BuilderTier::Reference && pool.len() > REFERENCE_GATE {
            builder_timings.push(TierTiming {
                tier: tier.name(),
                duration: Duration::ZERO,
                verified: None,
            });
            continue;
        }

        let start = Instant::now();
        let matrix = tier.build(pool);
        let duration = start.elapsed();

        let verified = match &baseline_matrix {
            Some(baseline) => baseline.equivalent(&matrix),
            None => {
                baseline_matrix = Some(matrix);
                true
            }
        };

        builder_timings.push(TierTiming {
            tier: tier.name(),
            duration,
            verified: Some(verified),
        });
    }

    // Evaluator timings run against one fixed matrix and opening
    let matrix = baseline_matrix.unwrap_or_else(|| build_hint_matrix_parallel(pool));
    let opening_size = opening_size.min(pool.len());
    let opening: Vec<usize> = sample(&mut rand::rng(), pool.len(), opening_size).into_vec();

    let mut evaluator_timings = Vec::new();
    let mut baseline_score: Option<OpeningScore> = None;

    for tier in EvaluatorTier::ALL {
        if tier == EvaluatorTier::Reference && pool.len() > REFERENCE_GATE {
            evaluator_timings.push(TierTiming {
                tier: tier.name(),
                duration: Duration::ZERO,
                verified: None,
            });
            continue;
        }

        let start = Instant::now();
        let result = tier.evaluate(pool, &matrix, &opening);
        let duration = start.elapsed();

        let verified = match result {
            Ok(score) => match baseline_score {
                Some(baseline) => baseline.approx_eq(score, SCORE_REL_TOL),
                None => {
                    baseline_score = Some(score);
                    true
                }
            },
            Err(_) => false,
        };

        evaluator_timings.push(TierTiming {
            tier: tier.name(),
            duration,
            verified: Some(verified),
        });
    }

    let all_verified = builder_timings
        .iter()
        .chain(&evaluator_timings)
        .all(|t| t.verified != Some(false));

    BenchmarkReport {
        pool_size: pool.len(),
        word_len: pool.word_len(),
        opening_size,
        builder_timings,
        evaluator_timings,
        all_verified,
    }
}
