//! Core domain types for the opening evaluation engine
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod letters;
mod pool;
mod word;

pub use letters::LetterSet;
pub use pool::WordPool;
pub use word::{EncodingError, Word};
