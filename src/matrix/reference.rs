//! Naive reference builder
//!
//! Double loop over unordered pairs with generic hash-set intersection for
//! the common letters. Slow, but obviously correct: every other tier is
//! validated against this one. Tests gate it to small pools (N <= ~100).

use super::HintMatrix;
use crate::core::WordPool;
use rustc_hash::FxHashSet;

/// Build the hint matrix the straightforward way
///
/// For each pair `i <= j`: scan the L positions for equality, intersect the
/// two words' letter sets, and write both the cell and its mirror.
#[must_use]
pub fn build_hint_matrix_reference(pool: &WordPool) -> HintMatrix {
    let n = pool.len();
    let l = pool.word_len();
    let mut matrix = HintMatrix::zeroed(n, l);

    for i in 0..n {
        let word_i = pool.word_bytes(i);
        for j in i..n {
            let word_j = pool.word_bytes(j);

            for pos in 0..l {
                if word_i[pos] == word_j[pos] {
                    matrix.pair_mut(i, j)[pos] = word_i[pos];
                    matrix.pair_mut(j, i)[pos] = word_i[pos];
                }
            }

            let set_i: FxHashSet<u8> = word_i.iter().copied().collect();
            let set_j: FxHashSet<u8> = word_j.iter().copied().collect();
            for (slot, &letter) in set_i.intersection(&set_j).enumerate() {
                matrix.pair_mut(i, j)[l + slot] = letter;
                matrix.pair_mut(j, i)[l + slot] = letter;
            }
        }
    }

    matrix
}
