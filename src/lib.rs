//! Wordle Openings
//!
//! Ranks candidate opening guesses for Wordle-like games by estimating how
//! much information a guess set reveals about an unknown secret drawn from a
//! fixed word pool. The core is a precomputed pairwise hint matrix and an
//! evaluator that averages information gain over every possible secret, each
//! implemented in several mutually-verified performance tiers.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_openings::core::WordPool;
//! use wordle_openings::{build_hint_matrix, evaluate_opening};
//!
//! let pool = WordPool::parse(["crane", "slate", "story", "fjord", "wimpy"]).unwrap();
//! let matrix = build_hint_matrix(&pool);
//!
//! let score = evaluate_opening(&pool, &matrix, &[0]).unwrap();
//! assert!(score.expected_bits > 0.0);
//! assert!(score.expected_remaining <= 5.0);
//! ```

// Core domain types
pub mod core;

// Pairwise hint matrix and its builder tiers
pub mod matrix;

// Opening evaluation tiers
pub mod evaluator;

// Letter statistics for search pruning
pub mod analysis;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

use crate::core::WordPool;
use crate::evaluator::{EvalError, OpeningScore};
use crate::matrix::HintMatrix;

/// Build the pairwise hint matrix with the default (parallel) tier
///
/// Benchmarks and tests that need a specific tier call the tier functions
/// in [`matrix`] directly.
#[must_use]
pub fn build_hint_matrix(pool: &WordPool) -> HintMatrix {
    matrix::build_hint_matrix_parallel(pool)
}

/// Score an opening with the default (parallel) tier
///
/// # Errors
/// Returns `EvalError` if an opening index is out of range or the
/// compatible-count invariant is violated.
pub fn evaluate_opening(
    pool: &WordPool,
    matrix: &HintMatrix,
    opening: &[usize],
) -> Result<OpeningScore, EvalError> {
    evaluator::evaluate_opening_parallel(pool, matrix, opening)
}
