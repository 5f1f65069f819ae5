//! Naive reference evaluator
//!
//! Merges hint rows and counts compatible words with plain loops and hash
//! sets. Ground truth for the faster tiers.

use super::{EvalError, OpeningScore, empty_selection_score, validate_opening};
use crate::core::WordPool;
use crate::matrix::HintMatrix;
use rustc_hash::FxHashSet;

/// Evaluate an opening the straightforward way
///
/// For each candidate secret k: merge the opening rows against k (position
/// max, letter-set union), count pool words compatible with the merged
/// hint, and accumulate the entropy and survivor terms.
///
/// # Errors
/// Returns `EvalError` if an opening index is out of range or some secret
/// ends up with zero compatible words.
pub fn evaluate_opening_reference(
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

    let mut entropy_sum = 0.0;
    let mut remaining_sum = 0.0;

    for k in 0..n {
        let mut pos_hint = vec![0u8; l];
        let mut letters: FxHashSet<u8> = FxHashSet::default();

        for &i in opening {
            let row = matrix.pair(i, k);
            for pos in 0..l {
                pos_hint[pos] = pos_hint[pos].max(row[pos]);
            }
            letters.extend(row[l..].iter().copied().filter(|&b| b != 0));
        }

        let mut compatible = 0usize;
        for w in 0..n {
            let word = pool.word_bytes(w);

            let positions_ok = pos_hint
                .iter()
                .zip(word)
                .all(|(&hint, &byte)| hint == 0 || hint == byte);
            if !positions_ok {
                continue;
            }

            let word_letters: FxHashSet<u8> = word.iter().copied().collect();
            if letters.is_subset(&word_letters) {
                compatible += 1;
            }
        }

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
    use crate::matrix::build_hint_matrix_reference;

    #[test]
    fn empty_selection_identity() {
        let pool = WordPool::parse(["CAT", "BAT", "CAR"]).unwrap();
        let matrix = build_hint_matrix_reference(&pool);

        let score = evaluate_opening_reference(&pool, &matrix, &[]).unwrap();
        assert_eq!(score.expected_bits, 0.0);
        assert_eq!(score.expected_remaining, 3.0);
    }

    #[test]
    fn single_guess_discriminates() {
        let pool = WordPool::parse(["CAT", "BAT", "CAR"]).unwrap();
        let matrix = build_hint_matrix_reference(&pool);

        let score = evaluate_opening_reference(&pool, &matrix, &[0]).unwrap();
        assert!(score.expected_bits > 0.0);
        assert!(score.expected_remaining < 3.0);
        assert!(score.expected_remaining >= 1.0);
    }

    #[test]
    fn out_of_range_index_rejected_up_front() {
        let pool = WordPool::parse(["CAT", "BAT"]).unwrap();
        let matrix = build_hint_matrix_reference(&pool);

        assert_eq!(
            evaluate_opening_reference(&pool, &matrix, &[0, 2]),
            Err(EvalError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn guessing_everything_pins_every_secret() {
        // With all distinct words guessed, each secret's own position row
        // pins it exactly: log2(N) bits, one survivor
        let pool = WordPool::parse(["CAT", "DOG", "EWE"]).unwrap();
        let matrix = build_hint_matrix_reference(&pool);

        let score = evaluate_opening_reference(&pool, &matrix, &[0, 1, 2]).unwrap();
        assert!((score.expected_bits - (3.0_f64).log2()).abs() < 1e-9);
        assert!((score.expected_remaining - 1.0).abs() < 1e-9);
    }
}
