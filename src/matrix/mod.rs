//! Pairwise cross-word hint matrix
//!
//! For every pair of pool words `(i, j)` the matrix records which letter
//! positions coincide and which letters the two words share. This is the
//! precomputation that makes opening evaluation cheap: the hint a guess `i`
//! would receive against a secret `j` is a single row lookup.
//!
//! The builder exists in five tiers, all producing equivalent matrices:
//! a naive reference, a presence-bitmap pass, a set-based hybrid, a tight
//! serial kernel, and a rayon-parallel kernel. Tier choice is explicit -
//! callers name the function they want so benchmarks and tests can compare
//! tiers directly.

mod bitmap;
mod kernel;
mod parallel;
mod reference;
mod sets;

pub use bitmap::build_hint_matrix_bitmap;
pub use kernel::build_hint_matrix_kernel;
pub use parallel::build_hint_matrix_parallel;
pub use reference::build_hint_matrix_reference;
pub use sets::build_hint_matrix_sets;

use crate::core::{LetterSet, WordPool};

/// Dense `N x N x 2L` byte matrix of pairwise hints
///
/// For pair `(i, j)`:
/// - slots `[0, L)` hold the position-match vector: slot `p` is the shared
///   letter code when `word[i][p] == word[j][p]`, else 0;
/// - slots `[L, 2L)` hold the letters common to both words as a packed,
///   unordered, zero-padded set, each letter once.
///
/// The matrix is symmetric, its diagonal position section reproduces the
/// word itself, and the packed set never holds more than L letters. Built
/// once per pool, read-only afterwards.
///
/// The common-letter section is a simplified stand-in for Wordle's yellow
/// feedback: each shared letter is recorded once, without the
/// per-occurrence consumption real Wordle applies to repeated letters.
/// Downstream opening rankings depend on this exact metric; do not change
/// it to match official coloring rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintMatrix {
    data: Vec<u8>,
    len: usize,
    word_len: usize,
}

impl HintMatrix {
    /// Allocate an all-zero matrix for `len` words of length `word_len`
    pub(crate) fn zeroed(len: usize, word_len: usize) -> Self {
        Self {
            data: vec![0; len * len * 2 * word_len],
            len,
            word_len,
        }
    }

    /// Number of words N this matrix covers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for the empty pool's matrix
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Word length L
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Length of one pair entry (2L)
    #[inline]
    #[must_use]
    pub fn pair_len(&self) -> usize {
        2 * self.word_len
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        (i * self.len + j) * self.pair_len()
    }

    /// Full hint row for pair `(i, j)`: position section then packed set
    ///
    /// # Panics
    /// Panics if `i` or `j` is outside `[0, len)`
    #[inline]
    #[must_use]
    pub fn pair(&self, i: usize, j: usize) -> &[u8] {
        assert!(i < self.len && j < self.len, "pair index out of range");
        let start = self.offset(i, j);
        &self.data[start..start + self.pair_len()]
    }

    /// Position-match section of pair `(i, j)` (slots `[0, L)`)
    ///
    /// # Panics
    /// Panics if `i` or `j` is outside `[0, len)`
    #[inline]
    #[must_use]
    pub fn positions(&self, i: usize, j: usize) -> &[u8] {
        &self.pair(i, j)[..self.word_len]
    }

    /// Packed common-letter section of pair `(i, j)` (slots `[L, 2L)`)
    ///
    /// The slot order is unspecified; compare via [`common_set`].
    ///
    /// # Panics
    /// Panics if `i` or `j` is outside `[0, len)`
    ///
    /// [`common_set`]: Self::common_set
    #[inline]
    #[must_use]
    pub fn common(&self, i: usize, j: usize) -> &[u8] {
        &self.pair(i, j)[self.word_len..]
    }

    /// The common-letter section of pair `(i, j)` as a set
    #[inline]
    #[must_use]
    pub fn common_set(&self, i: usize, j: usize) -> LetterSet {
        LetterSet::from_bytes(self.common(i, j))
    }

    /// Tier-equivalence check against another matrix
    ///
    /// True when both matrices cover the same pool shape, every position
    /// section is byte-identical, and every packed common-letter section
    /// holds the same set of letters. Packed order is allowed to differ:
    /// the intersection slots are a set, not a sequence.
    #[must_use]
    pub fn equivalent(&self, other: &Self) -> bool {
        if self.len != other.len || self.word_len != other.word_len {
            return false;
        }

        for i in 0..self.len {
            for j in 0..self.len {
                if self.positions(i, j) != other.positions(i, j) {
                    return false;
                }
                if self.common_set(i, j) != other.common_set(i, j) {
                    return false;
                }
            }
        }

        true
    }

    /// Mutable hint row for pair `(i, j)`; builders only
    #[inline]
    pub(crate) fn pair_mut(&mut self, i: usize, j: usize) -> &mut [u8] {
        let start = self.offset(i, j);
        let end = start + self.pair_len();
        &mut self.data[start..end]
    }

    /// Whole backing buffer; the parallel builder partitions it by row
    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Fill every position-match section with one whole-pool elementwise pass
///
/// Shared by the bitmap and set-hybrid tiers, which differ only in how they
/// compute the common-letter sections.
pub(crate) fn fill_position_sections(pool: &WordPool, matrix: &mut HintMatrix) {
    let n = pool.len();
    let l = pool.word_len();

    for i in 0..n {
        for j in 0..n {
            let word_i = pool.word_bytes(i);
            let word_j = pool.word_bytes(j);
            let row = matrix.pair_mut(i, j);
            for pos in 0..l {
                if word_i[pos] == word_j[pos] {
                    row[pos] = word_i[pos];
                }
            }
        }
    }
}

/// Builder tier, the explicit parameter benchmarks and tests iterate over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderTier {
    /// Naive double loop with generic set intersection; ground truth
    Reference,
    /// Whole-pool position pass plus per-word 256-slot presence bitmaps
    Bitmap,
    /// Same position pass, common letters via precomputed frozen sets
    Sets,
    /// Tight serial loop with an in-place scratch presence array
    Kernel,
    /// The kernel, with rows partitioned across rayon workers
    Parallel,
}

impl BuilderTier {
    /// Every tier, reference first
    pub const ALL: [Self; 5] = [
        Self::Reference,
        Self::Bitmap,
        Self::Sets,
        Self::Kernel,
        Self::Parallel,
    ];

    /// Create a tier from a name string
    ///
    /// Supported names: "reference", "bitmap", "sets", "kernel", "parallel".
    /// Defaults to parallel if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "reference" | "naive" => Self::Reference,
            "bitmap" => Self::Bitmap,
            "sets" | "fast" => Self::Sets,
            "kernel" | "serial" => Self::Kernel,
            _ => Self::Parallel,
        }
    }

    /// Stable display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Bitmap => "bitmap",
            Self::Sets => "sets",
            Self::Kernel => "kernel",
            Self::Parallel => "parallel",
        }
    }

    /// Build the hint matrix with this tier's implementation
    #[must_use]
    pub fn build(self, pool: &WordPool) -> HintMatrix {
        match self {
            Self::Reference => build_hint_matrix_reference(pool),
            Self::Bitmap => build_hint_matrix_bitmap(pool),
            Self::Sets => build_hint_matrix_sets(pool),
            Self::Kernel => build_hint_matrix_kernel(pool),
            Self::Parallel => build_hint_matrix_parallel(pool),
        }
    }
}

impl std::fmt::Display for BuilderTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordPool;

    fn cat_bat_car() -> WordPool {
        WordPool::parse(["CAT", "BAT", "CAR"]).unwrap()
    }

    #[test]
    fn concrete_position_sections() {
        let pool = cat_bat_car();
        for tier in BuilderTier::ALL {
            let matrix = tier.build(&pool);

            // CAT vs BAT: positions 1, 2 match (A, T)
            assert_eq!(matrix.positions(0, 1), &[0, 65, 84], "{tier}");
            // CAT vs CAR: positions 0, 1 match (C, A)
            assert_eq!(matrix.positions(0, 2), &[67, 65, 0], "{tier}");
        }
    }

    #[test]
    fn concrete_common_sections() {
        let pool = cat_bat_car();
        for tier in BuilderTier::ALL {
            let matrix = tier.build(&pool);

            assert_eq!(
                matrix.common_set(0, 1),
                LetterSet::from_bytes(b"AT"),
                "{tier}"
            );
            assert_eq!(
                matrix.common_set(1, 2),
                LetterSet::from_bytes(b"A"),
                "{tier}"
            );
        }
    }

    #[test]
    fn symmetry() {
        let pool = WordPool::parse(["CRANE", "SLATE", "STORY", "FJORD", "WIMPY"]).unwrap();
        for tier in BuilderTier::ALL {
            let matrix = tier.build(&pool);
            for i in 0..pool.len() {
                for j in 0..pool.len() {
                    assert_eq!(matrix.pair(i, j), matrix.pair(j, i), "{tier} ({i},{j})");
                }
            }
        }
    }

    #[test]
    fn diagonal_reproduces_word() {
        let pool = WordPool::parse(["CRANE", "SLATE", "SPEED"]).unwrap();
        for tier in BuilderTier::ALL {
            let matrix = tier.build(&pool);
            for i in 0..pool.len() {
                assert_eq!(matrix.positions(i, i), pool.word_bytes(i), "{tier}");
            }
        }
    }

    #[test]
    fn common_section_bounded_by_word_len() {
        let pool = WordPool::parse(["SPEED", "ERASE", "CRANE"]).unwrap();
        for tier in BuilderTier::ALL {
            let matrix = tier.build(&pool);
            for i in 0..pool.len() {
                for j in 0..pool.len() {
                    let nonzero = matrix.common(i, j).iter().filter(|&&b| b != 0).count();
                    assert!(nonzero <= pool.word_len(), "{tier}");
                }
            }
        }
    }

    #[test]
    fn duplicate_letters_recorded_once() {
        // SPEED and ERASE share S, E; E repeats in both but packs once
        let pool = WordPool::parse(["SPEED", "ERASE"]).unwrap();
        for tier in BuilderTier::ALL {
            let matrix = tier.build(&pool);
            let common = matrix.common_set(0, 1);
            assert_eq!(common, LetterSet::from_bytes(b"SE"), "{tier}");

            let nonzero = matrix.common(0, 1).iter().filter(|&&b| b != 0).count();
            assert_eq!(nonzero, 2, "{tier}");
        }
    }

    #[test]
    fn empty_pool() {
        let pool = WordPool::parse(Vec::<String>::new()).unwrap();
        for tier in BuilderTier::ALL {
            let matrix = tier.build(&pool);
            assert!(matrix.is_empty());
            assert_eq!(matrix.len(), 0);
        }
    }

    #[test]
    fn single_word_pool() {
        let pool = WordPool::parse(["CRANE"]).unwrap();
        for tier in BuilderTier::ALL {
            let matrix = tier.build(&pool);
            assert_eq!(matrix.len(), 1);
            assert_eq!(matrix.positions(0, 0), b"CRANE");
            assert_eq!(matrix.common_set(0, 0), LetterSet::from_bytes(b"CRANE"));
        }
    }

    #[test]
    fn duplicate_words_in_pool() {
        // Duplicates are distinct indices with identical rows
        let pool = WordPool::parse(["CRANE", "CRANE", "SLATE"]).unwrap();
        for tier in BuilderTier::ALL {
            let matrix = tier.build(&pool);
            assert_eq!(matrix.pair(0, 2), matrix.pair(1, 2), "{tier}");
            assert_eq!(matrix.positions(0, 1), b"CRANE", "{tier}");
        }
    }
}
