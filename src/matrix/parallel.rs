//! Parallel kernel builder
//!
//! Identical per-cell computation to the serial kernel, with the outer loop
//! over row index spread across rayon workers. The backing buffer is
//! partitioned into whole rows with `par_chunks_mut`, so each worker holds
//! the only `&mut` to the cells it writes; no worker ever touches another
//! row, and no synchronization is needed beyond the implicit join.
//!
//! Unlike the serial tier, a row's owner computes every cell `(i, j)` of its
//! row directly rather than mirroring from the upper triangle; each
//! symmetric cell is produced by exactly one owner.

use super::HintMatrix;
use super::kernel::fill_pair;
use crate::core::WordPool;
use rayon::prelude::*;

/// Build the hint matrix with one rayon task per matrix row
#[must_use]
pub fn build_hint_matrix_parallel(pool: &WordPool) -> HintMatrix {
    let n = pool.len();
    let l = pool.word_len();
    let mut matrix = HintMatrix::zeroed(n, l);

    let row_len = n * 2 * l;
    if row_len == 0 {
        return matrix;
    }

    matrix
        .data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(i, row)| {
            let word_i = pool.word_bytes(i);
            let mut scratch = [0u8; 256];

            for j in 0..n {
                let word_j = pool.word_bytes(j);
                let cell = &mut row[j * 2 * l..(j + 1) * 2 * l];

                // Fixed operand order per unordered pair keeps mirror cells
                // byte-identical, packed order included
                if i <= j {
                    fill_pair(word_i, word_j, &mut scratch, cell);
                } else {
                    fill_pair(word_j, word_i, &mut scratch, cell);
                }
            }
        });

    matrix
}
