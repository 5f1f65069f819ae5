//! Ordered word pool with stable indices
//!
//! A `WordPool` is the unit of analysis: every other component addresses
//! words purely by their 0-based pool index. Duplicates are permitted and
//! preserved; the pool is never mutated after construction.

use super::word::{EncodingError, Word};

/// Ordered, immutable collection of equal-length words
///
/// Alongside the owned [`Word`] values the pool keeps a flat row-major
/// `N x L` byte array so the kernel tiers can index letter codes without
/// per-word indirection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<Word>,
    flat: Vec<u8>,
    word_len: usize,
}

impl WordPool {
    /// Build a pool from already-validated words
    ///
    /// The first word fixes the pool's length L; every other word must match.
    /// An empty pool is valid and reports `word_len() == 0`.
    ///
    /// # Errors
    /// Returns `EncodingError::LengthMismatch` if word lengths are
    /// inconsistent.
    pub fn new(words: Vec<Word>) -> Result<Self, EncodingError> {
        let word_len = words.first().map_or(0, Word::len);

        for word in &words {
            if word.len() != word_len {
                return Err(EncodingError::LengthMismatch {
                    expected: word_len,
                    actual: word.len(),
                });
            }
        }

        let mut flat = Vec::with_capacity(words.len() * word_len);
        for word in &words {
            flat.extend_from_slice(word.bytes());
        }

        Ok(Self {
            words,
            flat,
            word_len,
        })
    }

    /// Build a pool from strings, normalizing case
    ///
    /// # Errors
    /// Returns `EncodingError` if any word fails encoding or lengths are
    /// inconsistent.
    ///
    /// # Examples
    /// ```
    /// use wordle_openings::core::WordPool;
    ///
    /// let pool = WordPool::parse(["cat", "BAT", "car"]).unwrap();
    /// assert_eq!(pool.len(), 3);
    /// assert_eq!(pool.word_len(), 3);
    /// assert_eq!(pool.word_at(1).text(), "BAT");
    ///
    /// assert!(WordPool::parse(["cat", "crane"]).is_err());
    /// ```
    pub fn parse<I, S>(items: I) -> Result<Self, EncodingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = items
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// Number of words N
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True for the empty pool
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Shared word length L (0 for the empty pool)
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Word at a pool index
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn word_at(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// All words in pool order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Letter codes of the word at a pool index
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn word_bytes(&self, index: usize) -> &[u8] {
        &self.flat[index * self.word_len..(index + 1) * self.word_len]
    }

    /// The full flat `N x L` byte array, row-major
    #[inline]
    #[must_use]
    pub fn flat_bytes(&self) -> &[u8] {
        &self.flat
    }

    /// Index of the first word matching `text` (case-insensitive)
    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<usize> {
        let needle = text.to_uppercase();
        self.words.iter().position(|w| w.text() == needle)
    }
}
