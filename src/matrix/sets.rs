//! Set-hybrid builder
//!
//! Same whole-pool position pass as the bitmap tier; common letters instead
//! come from per-word frozen `FxHashSet`s intersected per unordered pair.
//! Packed letters are sorted before writing.

use super::{HintMatrix, fill_position_sections};
use crate::core::WordPool;
use rustc_hash::FxHashSet;

/// Build the hint matrix with precomputed per-word letter sets
#[must_use]
pub fn build_hint_matrix_sets(pool: &WordPool) -> HintMatrix {
    let n = pool.len();
    let l = pool.word_len();
    let mut matrix = HintMatrix::zeroed(n, l);

    fill_position_sections(pool, &mut matrix);

    let word_sets: Vec<FxHashSet<u8>> = (0..n)
        .map(|i| pool.word_bytes(i).iter().copied().collect())
        .collect();

    for i in 0..n {
        for j in i..n {
            let mut common: Vec<u8> = word_sets[i].intersection(&word_sets[j]).copied().collect();
            common.sort_unstable();

            for (slot, &letter) in common.iter().enumerate() {
                matrix.pair_mut(i, j)[l + slot] = letter;
                matrix.pair_mut(j, i)[l + slot] = letter;
            }
        }
    }

    matrix
}
