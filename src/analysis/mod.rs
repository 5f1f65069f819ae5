//! Pool-level letter statistics
//!
//! Cheap positional frequency/entropy summaries used to pre-rank words and
//! prune the opening search before the full hint-matrix evaluation runs.

mod letter_stats;

pub use letter_stats::{
    opening_raw_entropy, positional_letter_entropy, positional_letter_frequency,
};
