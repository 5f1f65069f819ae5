//! Word lists for opening analysis
//!
//! Provides the embedded default pool compiled into the binary, plus the
//! strict file loader.

mod embedded;
pub mod loader;

pub use embedded::{WORDS_EN_5, WORDS_EN_5_COUNT};
pub use loader::{LoadError, load_pool_from_file, pool_from_lines, pool_from_slice};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS_EN_5.len(), WORDS_EN_5_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS_EN_5 {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_builds_a_pool() {
        let pool = pool_from_slice(WORDS_EN_5);
        assert_eq!(pool.len(), WORDS_EN_5_COUNT);
        assert_eq!(pool.word_len(), 5);
    }

    #[test]
    fn embedded_list_contains_known_openers() {
        let pool = pool_from_slice(WORDS_EN_5);
        for opener in ["crane", "slate", "story", "fjord", "wimpy"] {
            assert!(pool.index_of(opener).is_some(), "missing {opener}");
        }
    }
}
