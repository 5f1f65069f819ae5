//! Command implementations

pub mod benchmark;
pub mod compare;
pub mod evaluate;
pub mod search;

pub use benchmark::{BenchmarkReport, TierTiming, run_tier_benchmark};
pub use compare::{CompareReport, run_compare};
pub use evaluate::{EvaluateResult, evaluate_opening_words};
pub use search::{SearchResult, search_best_opening};
