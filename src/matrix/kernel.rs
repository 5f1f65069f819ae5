//! Serial kernel builder
//!
//! The tight-loop formulation: one pass per unordered pair, common letters
//! tracked in a fixed 256-slot scratch array that is consumed in place as
//! letters are packed. No heap allocation inside the pair loop.

use super::HintMatrix;
use crate::core::WordPool;

/// Build the hint matrix with the flat serial kernel
#[must_use]
pub fn build_hint_matrix_kernel(pool: &WordPool) -> HintMatrix {
    let n = pool.len();
    let l = pool.word_len();
    let mut matrix = HintMatrix::zeroed(n, l);

    let mut scratch = [0u8; 256];
    // Per-pair hint row, written to the cell and its mirror in one shot
    let mut row = vec![0u8; 2 * l];

    for i in 0..n {
        let word_i = pool.word_bytes(i);
        for j in i..n {
            let word_j = pool.word_bytes(j);

            fill_pair(word_i, word_j, &mut scratch, &mut row);

            matrix.pair_mut(i, j).copy_from_slice(&row);
            matrix.pair_mut(j, i).copy_from_slice(&row);
            row.fill(0);
        }
    }

    matrix
}

/// Compute one pair's hint row into `row`
///
/// `scratch` must be all-zero on entry and is restored to all-zero before
/// returning. Marking word_i's letters, then zeroing each mark as word_j
/// consumes it, packs every shared letter exactly once even when it repeats
/// in either word.
pub(super) fn fill_pair(word_i: &[u8], word_j: &[u8], scratch: &mut [u8; 256], row: &mut [u8]) {
    let l = word_i.len();

    for pos in 0..l {
        if word_i[pos] == word_j[pos] {
            row[pos] = word_i[pos];
        }
    }

    for &byte in word_i {
        scratch[byte as usize] = 1;
    }
    let mut slot = l;
    for &byte in word_j {
        if scratch[byte as usize] == 1 {
            scratch[byte as usize] = 0;
            row[slot] = byte;
            slot += 1;
        }
    }
    for &byte in word_i {
        scratch[byte as usize] = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterSet, WordPool};

    #[test]
    fn agrees_with_reference() {
        let pool = WordPool::parse(["CRANE", "SLATE", "SPEED", "FJORD"]).unwrap();
        let kernel = build_hint_matrix_kernel(&pool);
        let reference = super::super::build_hint_matrix_reference(&pool);

        for i in 0..pool.len() {
            for j in 0..pool.len() {
                assert_eq!(kernel.positions(i, j), reference.positions(i, j));
                assert_eq!(kernel.common_set(i, j), reference.common_set(i, j));
            }
        }
    }

    #[test]
    fn scratch_left_clean_between_pairs() {
        let mut scratch = [0u8; 256];
        let mut row = vec![0u8; 10];

        fill_pair(b"SPEED", b"ERASE", &mut scratch, &mut row);
        assert!(scratch.iter().all(|&b| b == 0));

        // A second, disjoint pair must not see letters from the first
        row.fill(0);
        fill_pair(b"WIMPY", b"FJORD", &mut scratch, &mut row);
        assert_eq!(LetterSet::from_bytes(&row[5..]), LetterSet::EMPTY);
    }

    #[test]
    fn repeated_letters_pack_once() {
        let mut scratch = [0u8; 256];
        let mut row = vec![0u8; 10];

        fill_pair(b"GEESE", b"EERIE", &mut scratch, &mut row);
        let packed: Vec<u8> = row[5..].iter().copied().filter(|&b| b != 0).collect();
        assert_eq!(packed, vec![b'E']);
    }
}
