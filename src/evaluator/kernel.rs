//! Serial kernel evaluator
//!
//! One pass per secret with reusable scratch, flat-slice indexing, and the
//! same bitmask subset test as the staged tier. No allocation inside the
//! secret loop.

use super::{EvalError, OpeningScore, empty_selection_score, letter_presence, validate_opening};
use crate::core::{LetterSet, WordPool};
use crate::matrix::HintMatrix;

/// Evaluate an opening with the flat serial kernel
///
/// # Errors
/// Returns `EvalError` if an opening index is out of range or some secret
/// ends up with zero compatible words.
pub fn evaluate_opening_kernel(
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

    let mut pos_hint = vec![0u8; l];
    let mut entropy_sum = 0.0;
    let mut remaining_sum = 0.0;

    for k in 0..n {
        let (entropy, compatible) =
            secret_term(pool, matrix, opening, &presence, &mut pos_hint, k)?;
        entropy_sum += entropy;
        remaining_sum += compatible as f64;
    }

    Ok(OpeningScore {
        expected_bits: entropy_sum / n as f64,
        expected_remaining: remaining_sum / n as f64,
    })
}

/// One secret's contribution: `(-log2(p_k), compatible(k))`
///
/// `pos_hint` is caller-provided scratch of length L; contents on entry are
/// irrelevant, it is reset here.
pub(super) fn secret_term(
    pool: &WordPool,
    matrix: &HintMatrix,
    opening: &[usize],
    presence: &[LetterSet],
    pos_hint: &mut [u8],
    k: usize,
) -> Result<(f64, usize), EvalError> {
    let n = pool.len();
    let l = pool.word_len();
    let flat = pool.flat_bytes();

    pos_hint.fill(0);
    let mut mask = LetterSet::new();

    for &i in opening {
        let row = matrix.pair(i, k);
        for pos in 0..l {
            if row[pos] > pos_hint[pos] {
                pos_hint[pos] = row[pos];
            }
        }
        for &letter in &row[l..] {
            mask.insert(letter); // 0 padding is ignored by insert
        }
    }

    let mut compatible = 0usize;
    'words: for w in 0..n {
        let word = &flat[w * l..(w + 1) * l];
        for pos in 0..l {
            if pos_hint[pos] != 0 && word[pos] != pos_hint[pos] {
                continue 'words;
            }
        }
        if mask.is_subset_of(presence[w]) {
            compatible += 1;
        }
    }

    if compatible == 0 {
        return Err(EvalError::InvariantViolation { secret: k });
    }

    let p_k = compatible as f64 / n as f64;
    Ok((-p_k.log2(), compatible))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_opening_reference;
    use crate::matrix::build_hint_matrix_kernel;

    #[test]
    fn agrees_with_reference() {
        let pool = WordPool::parse(["CRANE", "SLATE", "STORY", "FJORD", "WIMPY"]).unwrap();
        let matrix = build_hint_matrix_kernel(&pool);

        for opening in [vec![0], vec![1, 3], vec![0, 1, 2, 3, 4]] {
            let fast = evaluate_opening_kernel(&pool, &matrix, &opening).unwrap();
            let slow = evaluate_opening_reference(&pool, &matrix, &opening).unwrap();

            assert!((fast.expected_bits - slow.expected_bits).abs() < 1e-9);
            assert!((fast.expected_remaining - slow.expected_remaining).abs() < 1e-9);
        }
    }

    #[test]
    fn duplicate_opening_indices_are_idempotent() {
        // Max-merge and union-merge both absorb repeats
        let pool = WordPool::parse(["CAT", "BAT", "CAR"]).unwrap();
        let matrix = build_hint_matrix_kernel(&pool);

        let once = evaluate_opening_kernel(&pool, &matrix, &[0]).unwrap();
        let twice = evaluate_opening_kernel(&pool, &matrix, &[0, 0]).unwrap();

        assert!((once.expected_bits - twice.expected_bits).abs() < 1e-12);
        assert!((once.expected_remaining - twice.expected_remaining).abs() < 1e-12);
    }
}
