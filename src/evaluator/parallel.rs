//! Parallel kernel evaluator
//!
//! The per-secret loop is embarrassingly parallel: each secret's term reads
//! only shared immutable state. Terms are collected into per-secret slots
//! and reduced serially after the parallel section, so the floating-point
//! sum order is deterministic.

use super::kernel::secret_term;
use super::{EvalError, OpeningScore, empty_selection_score, letter_presence, validate_opening};
use crate::core::WordPool;
use crate::matrix::HintMatrix;
use rayon::prelude::*;

/// Evaluate an opening with one rayon task per candidate secret
///
/// # Errors
/// Returns `EvalError` if an opening index is out of range or some secret
/// ends up with zero compatible words.
pub fn evaluate_opening_parallel(
    pool: &WordPool,
    matrix: &HintMatrix,
    opening: &[usize],
) -> Result<OpeningScore, EvalError> {
    validate_opening(opening, pool.len())?;

    if opening.is_empty() {
        return Ok(empty_selection_score(pool.len()));
    }

    let n = pool.len();
    let l = pool.word_len();
    let presence = letter_presence(pool);

    let terms: Vec<(f64, usize)> = (0..n)
        .into_par_iter()
        .map_init(
            || vec![0u8; l],
            |pos_hint, k| secret_term(pool, matrix, opening, &presence, pos_hint, k),
        )
        .collect::<Result<_, _>>()?;

    let entropy_sum: f64 = terms.iter().map(|&(entropy, _)| entropy).sum();
    let remaining_sum: f64 = terms.iter().map(|&(_, compatible)| compatible as f64).sum();

    Ok(OpeningScore {
        expected_bits: entropy_sum / n as f64,
        expected_remaining: remaining_sum / n as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_opening_kernel;
    use crate::matrix::build_hint_matrix_parallel;

    #[test]
    fn agrees_with_serial_kernel() {
        let pool = WordPool::parse([
            "CRANE", "SLATE", "STORY", "FJORD", "WIMPY", "SPEED", "ERASE", "TRACE",
        ])
        .unwrap();
        let matrix = build_hint_matrix_parallel(&pool);

        for opening in [vec![0], vec![0, 1], vec![2, 5, 7]] {
            let parallel = evaluate_opening_parallel(&pool, &matrix, &opening).unwrap();
            let serial = evaluate_opening_kernel(&pool, &matrix, &opening).unwrap();

            assert!((parallel.expected_bits - serial.expected_bits).abs() < 1e-9);
            assert!((parallel.expected_remaining - serial.expected_remaining).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_pool_empty_selection() {
        let pool = WordPool::parse(Vec::<String>::new()).unwrap();
        let matrix = build_hint_matrix_parallel(&pool);

        let score = evaluate_opening_parallel(&pool, &matrix, &[]).unwrap();
        assert_eq!(score.expected_bits, 0.0);
        assert_eq!(score.expected_remaining, 0.0);
    }
}
