//! Bitmask-staged evaluator
//!
//! Stages the whole merge up front: one `N x L` array of merged position
//! hints and one `u32` letter mask per secret, built by sweeping each
//! opening row across all secrets at once. The per-word letter-subset test
//! then collapses to a single AND-and-compare against precomputed per-word
//! presence masks.

use super::{EvalError, OpeningScore, empty_selection_score, letter_presence, validate_opening};
use crate::core::{LetterSet, WordPool};
use crate::matrix::HintMatrix;

/// Evaluate an opening with staged merges and letter bitmasks
///
/// # Errors
/// Returns `EvalError` if an opening index is out of range or some secret
/// ends up with zero compatible words.
pub fn evaluate_opening_bitmask(
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

    // Merged position hints for every secret at once: elementwise max
    // across the opening's rows
    let mut merged_positions = vec![0u8; n * l];
    for &i in opening {
        for k in 0..n {
            let row = matrix.positions(i, k);
            let merged = &mut merged_positions[k * l..(k + 1) * l];
            for pos in 0..l {
                merged[pos] = merged[pos].max(row[pos]);
            }
        }
    }

    // Merged required-letter masks per secret: union across opening rows
    let mut merged_masks = vec![LetterSet::EMPTY; n];
    for &i in opening {
        for (k, mask) in merged_masks.iter_mut().enumerate() {
            *mask = mask.union(matrix.common_set(i, k));
        }
    }

    let mut entropy_sum = 0.0;
    let mut remaining_sum = 0.0;

    for k in 0..n {
        let pos_hint = &merged_positions[k * l..(k + 1) * l];
        let mask = merged_masks[k];

        let compatible = (0..n)
            .filter(|&w| {
                let word = pool.word_bytes(w);
                let positions_ok = pos_hint
                    .iter()
                    .zip(word)
                    .all(|(&hint, &byte)| hint == 0 || hint == byte);
                positions_ok && mask.is_subset_of(presence[w])
            })
            .count();

        if compatible == 0 {
            return Err(EvalError::InvariantViolation { secret: k });
        }

        let p_k = compatible as f64 / n as f64;
        entropy_sum += -p_k.log2();
        remaining_sum += compatible as f64;
    }

    Ok(OpeningScore {
        expected_bits: entropy_sum / n as f64,
        expected_remaining: remaining_sum / n as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_opening_reference;
    use crate::matrix::build_hint_matrix_kernel;

    #[test]
    fn agrees_with_reference() {
        let pool =
            WordPool::parse(["CRANE", "SLATE", "STORY", "FJORD", "WIMPY", "SPEED"]).unwrap();
        let matrix = build_hint_matrix_kernel(&pool);

        for opening in [vec![], vec![0], vec![0, 1], vec![3, 4, 5]] {
            let fast = evaluate_opening_bitmask(&pool, &matrix, &opening).unwrap();
            let slow = evaluate_opening_reference(&pool, &matrix, &opening).unwrap();

            assert!((fast.expected_bits - slow.expected_bits).abs() < 1e-9);
            assert!((fast.expected_remaining - slow.expected_remaining).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_selection_identity() {
        let pool = WordPool::parse(["CAT", "BAT"]).unwrap();
        let matrix = build_hint_matrix_kernel(&pool);

        let score = evaluate_opening_bitmask(&pool, &matrix, &[]).unwrap();
        assert_eq!(score.expected_bits, 0.0);
        assert_eq!(score.expected_remaining, 2.0);
    }
}
