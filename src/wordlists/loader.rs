//! Word list loading utilities
//!
//! The engine consumes exactly one external artifact: a word list, one word
//! per line, all of equal length, case-insensitive. Loading is strict -
//! a bad byte or a mixed-length list is an error, not a skipped line.

use crate::core::{EncodingError, WordPool};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for word list loading
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io(io::Error),
    /// A line failed word encoding or lengths were inconsistent
    Encoding(EncodingError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
            Self::Encoding(err) => write!(f, "Invalid word list: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encoding(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<EncodingError> for LoadError {
    fn from(err: EncodingError) -> Self {
        Self::Encoding(err)
    }
}

/// Load a pool from a word list file
///
/// Blank lines are ignored; everything else must encode. Case is normalized
/// during pool construction.
///
/// # Errors
/// Returns `LoadError` if the file cannot be read, any word contains a byte
/// outside `A`..=`Z`, or word lengths are inconsistent.
///
/// # Examples
/// ```no_run
/// use wordle_openings::wordlists::loader::load_pool_from_file;
///
/// let pool = load_pool_from_file("data/words_en_5.txt").unwrap();
/// println!("Loaded {} words", pool.len());
/// ```
pub fn load_pool_from_file<P: AsRef<Path>>(path: P) -> Result<WordPool, LoadError> {
    let content = fs::read_to_string(path)?;
    pool_from_lines(&content)
}

/// Build a pool from newline-separated text
///
/// # Errors
/// Returns `LoadError::Encoding` on any invalid word or length mismatch.
pub fn pool_from_lines(content: &str) -> Result<WordPool, LoadError> {
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());
    Ok(WordPool::parse(words)?)
}

/// Build a pool from an embedded string slice
///
/// # Panics
/// Panics if the slice fails pool construction; embedded lists are
/// validated by the build script and tests.
///
/// # Examples
/// ```
/// use wordle_openings::wordlists::{WORDS_EN_5, pool_from_slice};
///
/// let pool = pool_from_slice(&WORDS_EN_5[..50]);
/// assert_eq!(pool.len(), 50);
/// ```
#[must_use]
pub fn pool_from_slice(slice: &[&str]) -> WordPool {
    WordPool::parse(slice.iter().copied()).expect("embedded word list is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_from_lines_parses_and_normalizes() {
        let pool = pool_from_lines("cat\nBAT\n\n  car  \n").unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.word_at(1).text(), "BAT");
    }

    #[test]
    fn pool_from_lines_rejects_mixed_lengths() {
        let result = pool_from_lines("cat\ncrane\n");
        assert!(matches!(result, Err(LoadError::Encoding(_))));
    }

    #[test]
    fn pool_from_lines_rejects_bad_bytes() {
        let result = pool_from_lines("cat\nc4t\n");
        assert!(matches!(result, Err(LoadError::Encoding(_))));
    }

    #[test]
    fn pool_from_lines_empty_input() {
        let pool = pool_from_lines("").unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_pool_from_file("/nonexistent/words.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
