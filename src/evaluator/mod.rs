//! Opening evaluation
//!
//! Scores a set of opening guesses by averaging, over every pool word
//! treated as the (uniformly likely) secret, the information revealed by
//! the merged hint those guesses would produce. The merge is commutative:
//! position hints combine by elementwise max (0 is "unconstrained"), common
//! letters by set union, so a selection's score is independent of its order.
//!
//! Four tiers mirror the builder's: a naive reference, a bitmask-staged
//! version, a serial kernel, and a rayon-parallel kernel. All agree within
//! floating-point tolerance.

mod bitmask;
mod kernel;
mod parallel;
mod reference;

pub use bitmask::evaluate_opening_bitmask;
pub use kernel::evaluate_opening_kernel;
pub use parallel::evaluate_opening_parallel;
pub use reference::evaluate_opening_reference;

use crate::core::{LetterSet, Word, WordPool};
use crate::matrix::HintMatrix;
use std::fmt;

/// Score of an opening: expected information and expected survivors
///
/// Produced fresh per evaluation call; never cached across pools.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningScore {
    /// Expected information gain in bits, averaged over all secrets
    pub expected_bits: f64,
    /// Expected number of pool words still compatible after feedback
    pub expected_remaining: f64,
}

impl OpeningScore {
    /// Tier-equivalence check within a relative tolerance
    ///
    /// The entropy sum is order-sensitive in floating point, so tiers are
    /// compared with a relative bound rather than exact equality.
    #[must_use]
    pub fn approx_eq(self, other: Self, rel_tol: f64) -> bool {
        fn close(a: f64, b: f64, rel_tol: f64) -> bool {
            a == b || (a - b).abs() <= rel_tol * a.abs().max(b.abs())
        }

        close(self.expected_bits, other.expected_bits, rel_tol)
            && close(self.expected_remaining, other.expected_remaining, rel_tol)
    }
}

/// Error type for opening evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An opening index fell outside `[0, N)`; raised before any computation
    IndexOutOfRange { index: usize, len: usize },
    /// Some secret had zero compatible words
    ///
    /// A secret is always compatible with its own hint, so this can only
    /// come from a builder/evaluator bug or a matrix that does not belong to
    /// the pool. Surfaced immediately instead of producing -inf entropy.
    InvariantViolation { secret: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Opening index {index} out of range for pool of {len} words")
            }
            Self::InvariantViolation { secret } => {
                write!(
                    f,
                    "No words compatible with secret index {secret}; hint matrix does not match pool"
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluator tier, the explicit parameter benchmarks and tests iterate over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorTier {
    /// Per-secret double loop with generic set merging; ground truth
    Reference,
    /// Staged position merge plus per-word `u32` letter bitmasks
    Bitmask,
    /// Single-pass serial loop over flat slices, no per-secret allocation
    Kernel,
    /// The kernel with the per-secret loop spread across rayon workers
    Parallel,
}

impl EvaluatorTier {
    /// Every tier, reference first
    pub const ALL: [Self; 4] = [Self::Reference, Self::Bitmask, Self::Kernel, Self::Parallel];

    /// Create a tier from a name string
    ///
    /// Supported names: "reference", "bitmask", "kernel", "parallel".
    /// Defaults to parallel if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "reference" | "naive" => Self::Reference,
            "bitmask" => Self::Bitmask,
            "kernel" | "serial" => Self::Kernel,
            _ => Self::Parallel,
        }
    }

    /// Stable display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Bitmask => "bitmask",
            Self::Kernel => "kernel",
            Self::Parallel => "parallel",
        }
    }

    /// Evaluate an opening with this tier's implementation
    ///
    /// # Errors
    /// Returns `EvalError` if an opening index is out of range or the
    /// compatible-count invariant is violated.
    pub fn evaluate(
        self,
        pool: &WordPool,
        matrix: &HintMatrix,
        opening: &[usize],
    ) -> Result<OpeningScore, EvalError> {
        match self {
            Self::Reference => evaluate_opening_reference(pool, matrix, opening),
            Self::Bitmask => evaluate_opening_bitmask(pool, matrix, opening),
            Self::Kernel => evaluate_opening_kernel(pool, matrix, opening),
            Self::Parallel => evaluate_opening_parallel(pool, matrix, opening),
        }
    }
}

impl fmt::Display for EvaluatorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reject out-of-range opening indices before any computation starts
pub(crate) fn validate_opening(opening: &[usize], len: usize) -> Result<(), EvalError> {
    for &index in opening {
        if index >= len {
            return Err(EvalError::IndexOutOfRange { index, len });
        }
    }
    Ok(())
}

/// The defined score of an empty selection: no constraint, whole pool left
pub(crate) fn empty_selection_score(pool_len: usize) -> OpeningScore {
    OpeningScore {
        expected_bits: 0.0,
        expected_remaining: pool_len as f64,
    }
}

/// Per-word letter-presence bitmasks, one `u32` per pool word
pub(crate) fn letter_presence(pool: &WordPool) -> Vec<LetterSet> {
    pool.words().iter().map(Word::letter_set).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_opening_accepts_in_range() {
        assert!(validate_opening(&[0, 2, 4], 5).is_ok());
        assert!(validate_opening(&[], 0).is_ok());
    }

    #[test]
    fn validate_opening_rejects_out_of_range() {
        assert_eq!(
            validate_opening(&[0, 5], 5),
            Err(EvalError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert!(validate_opening(&[0], 0).is_err());
    }

    #[test]
    fn approx_eq_tolerates_float_noise() {
        let a = OpeningScore {
            expected_bits: 3.0,
            expected_remaining: 12.5,
        };
        let b = OpeningScore {
            expected_bits: 3.0 * (1.0 + 1e-7),
            expected_remaining: 12.5,
        };
        let c = OpeningScore {
            expected_bits: 3.1,
            expected_remaining: 12.5,
        };

        assert!(a.approx_eq(b, 1e-5));
        assert!(!a.approx_eq(c, 1e-5));
        assert!(a.approx_eq(a, 0.0));
    }

    #[test]
    fn eval_error_display() {
        let err = EvalError::IndexOutOfRange { index: 7, len: 3 };
        assert!(err.to_string().contains('7'));

        let err = EvalError::InvariantViolation { secret: 2 };
        assert!(err.to_string().contains('2'));
    }
}
