//! Positional letter frequency and entropy
//!
//! A word scoring well here tends to score well under full evaluation, so
//! the opening search uses these maps as a cheap admission filter.

use crate::core::{Word, WordPool};
use rustc_hash::FxHashMap;

/// Letter frequency per position: `maps[pos][letter]` is the fraction of
/// pool words carrying `letter` at `pos`
///
/// Returns one map per position; empty for the empty pool.
#[must_use]
pub fn positional_letter_frequency(pool: &WordPool) -> Vec<FxHashMap<u8, f64>> {
    let n = pool.len();
    let l = pool.word_len();
    if n == 0 {
        return Vec::new();
    }

    let mut maps = Vec::with_capacity(l);
    for pos in 0..l {
        let mut histogram: FxHashMap<u8, usize> = FxHashMap::default();
        for i in 0..n {
            *histogram.entry(pool.word_bytes(i)[pos]).or_insert(0) += 1;
        }

        maps.push(
            histogram
                .into_iter()
                .map(|(letter, count)| (letter, count as f64 / n as f64))
                .collect(),
        );
    }

    maps
}

/// Letter information content per position: `-p * log2(p)` of the
/// positional frequency
#[must_use]
pub fn positional_letter_entropy(pool: &WordPool) -> Vec<FxHashMap<u8, f64>> {
    positional_letter_frequency(pool)
        .into_iter()
        .map(|freq_map| {
            freq_map
                .into_iter()
                .map(|(letter, p)| (letter, -p * p.log2()))
                .collect()
        })
        .collect()
}

/// Raw entropy score of an opening, before any hint-matrix evaluation
///
/// Sums positional letter entropies over the concatenated opening words,
/// keeping only the highest-entropy occurrence of each repeated letter; a
/// letter guessed twice reveals little more than guessed once.
#[must_use]
pub fn opening_raw_entropy(words: &[&Word], entropy_maps: &[FxHashMap<u8, f64>]) -> f64 {
    let l = entropy_maps.len();
    if l == 0 {
        return 0.0;
    }

    let mut best_per_letter: FxHashMap<u8, f64> = FxHashMap::default();
    for word in words {
        for (pos, &letter) in word.bytes().iter().enumerate() {
            let entropy = entropy_maps[pos % l]
                .get(&letter)
                .copied()
                .unwrap_or(0.0);
            let best = best_per_letter.entry(letter).or_insert(0.0);
            if entropy > *best {
                *best = entropy;
            }
        }
    }

    best_per_letter.values().sum()
}
