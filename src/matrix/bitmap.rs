//! Presence-bitmap builder
//!
//! The broadcast formulation: one whole-pool elementwise pass fills every
//! position-match section, then a 256-slot presence row per word turns the
//! common-letter computation into a pairwise AND over byte values. Packed
//! letters come out in ascending byte order.

use super::{HintMatrix, fill_position_sections};
use crate::core::WordPool;

const BYTE_RANGE: usize = 256;

/// Build the hint matrix via per-word byte-presence rows
#[must_use]
pub fn build_hint_matrix_bitmap(pool: &WordPool) -> HintMatrix {
    let n = pool.len();
    let l = pool.word_len();
    let mut matrix = HintMatrix::zeroed(n, l);

    fill_position_sections(pool, &mut matrix);

    // presence[i * 256 + value] == 1 when word i contains byte `value`
    let mut presence = vec![0u8; n * BYTE_RANGE];
    for i in 0..n {
        for &byte in pool.word_bytes(i) {
            presence[i * BYTE_RANGE + byte as usize] = 1;
        }
    }

    for i in 0..n {
        let row_i = &presence[i * BYTE_RANGE..(i + 1) * BYTE_RANGE];
        for j in i..n {
            let row_j = &presence[j * BYTE_RANGE..(j + 1) * BYTE_RANGE];

            let mut slot = l;
            for value in 0..BYTE_RANGE {
                if row_i[value] & row_j[value] == 1 {
                    matrix.pair_mut(i, j)[slot] = value as u8;
                    matrix.pair_mut(j, i)[slot] = value as u8;
                    slot += 1;
                }
            }
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordPool;

    #[test]
    fn packs_common_letters_ascending() {
        let pool = WordPool::parse(["CRANE", "SLATE"]).unwrap();
        let matrix = build_hint_matrix_bitmap(&pool);

        // A (65) before E (69), then zero padding
        assert_eq!(matrix.common(0, 1), &[b'A', b'E', 0, 0, 0]);
    }

    #[test]
    fn agrees_with_reference() {
        let pool = WordPool::parse(["CAT", "BAT", "CAR", "TAR", "RAT"]).unwrap();
        let bitmap = build_hint_matrix_bitmap(&pool);
        let reference = super::super::build_hint_matrix_reference(&pool);

        for i in 0..pool.len() {
            for j in 0..pool.len() {
                assert_eq!(bitmap.positions(i, j), reference.positions(i, j));
                assert_eq!(bitmap.common_set(i, j), reference.common_set(i, j));
            }
        }
    }
}
