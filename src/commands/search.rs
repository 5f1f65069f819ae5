//! Two-word opening search
//!
//! Exhausts word pairs in descending raw-entropy order, pruning pairs whose
//! cheap letter-statistics score cannot plausibly compete before paying for
//! a full hint-matrix evaluation.

use crate::analysis::{opening_raw_entropy, positional_letter_entropy};
use crate::core::WordPool;
use crate::evaluator::{OpeningScore, evaluate_opening_parallel};
use crate::matrix::build_hint_matrix_parallel;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Words per opening this search considers
const OPENING_SIZE: usize = 2;

/// Pruning slack: a pair must reach the best single word's raw entropy
/// scaled by 2^(1/2), with 10% headroom, before full evaluation
const PRUNE_HEADROOM: f64 = 1.1;

/// Result of an opening search
pub struct SearchResult {
    pub best_words: Vec<String>,
    pub best_score: OpeningScore,
    pub candidates_considered: usize,
    pub evaluated: usize,
    pub pruned: usize,
    pub duration: Duration,
}

/// Search for the best two-word opening
///
/// Considers the `limit` highest-raw-entropy words (the whole pool if
/// `None`) and every unordered pair among them. Pairs below the pruning
/// threshold are skipped; survivors are scored with the parallel evaluator
/// and ranked by expected bits.
///
/// # Errors
///
/// Returns an error if:
/// - The pool holds fewer than two words
/// - Evaluation fails (invariant violation)
pub fn search_best_opening(
    pool: &WordPool,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<SearchResult, String> {
    if pool.len() < OPENING_SIZE {
        return Err(format!(
            "Pool of {} words is too small for a {OPENING_SIZE}-word opening",
            pool.len()
        ));
    }

    let start = Instant::now();
    let matrix = build_hint_matrix_parallel(pool);
    let entropy_maps = positional_letter_entropy(pool);

    // Rank words by raw entropy, best first
    let mut ranked: Vec<(usize, f64)> = (0..pool.len())
        .map(|i| (i, opening_raw_entropy(&[pool.word_at(i)], &entropy_maps)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let candidates = limit
        .unwrap_or(ranked.len())
        .clamp(OPENING_SIZE, ranked.len());
    let ranked = &ranked[..candidates];

    let best_single_raw = ranked[0].1;
    let prune_threshold =
        best_single_raw * 2f64.powf(1.0 / OPENING_SIZE as f64) * PRUNE_HEADROOM;

    let total_pairs = candidates * (candidates - 1) / 2;
    let progress = if show_progress {
        let pb = ProgressBar::new(total_pairs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        Some(pb)
    } else {
        None
    };

    let mut best_score: Option<OpeningScore> = None;
    let mut best_pair = [0usize; OPENING_SIZE];
    let mut evaluated = 0usize;
    let mut pruned = 0usize;

    for a in 0..candidates {
        for b in 0..a {
            if let Some(pb) = &progress {
                pb.inc(1);
            }

            let (i, _) = ranked[a];
            let (j, _) = ranked[b];

            let raw =
                opening_raw_entropy(&[pool.word_at(i), pool.word_at(j)], &entropy_maps);
            if raw < prune_threshold {
                pruned += 1;
                continue;
            }

            let score = evaluate_opening_parallel(pool, &matrix, &[i, j])
                .map_err(|e| e.to_string())?;
            evaluated += 1;

            if best_score.is_none_or(|best| score.expected_bits > best.expected_bits) {
                best_score = Some(score);
                best_pair = [i, j];

                if let Some(pb) = &progress {
                    pb.set_message(format!(
                        "best: {}-{} ({:.2} bits)",
                        pool.word_at(i).text(),
                        pool.word_at(j).text(),
                        score.expected_bits
                    ));
                }
            }
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    // Heavily overlapping pools can prune every pair; fall back to the top
    // two raw-entropy words
    let (best_words, best_score) = match best_score {
        Some(score) => {
            let words = best_pair
                .iter()
                .map(|&i| pool.word_at(i).text().to_string())
                .collect();
            (words, score)
        }
        None => {
            let (i, _) = ranked[0];
            let (j, _) = ranked[1];
            let score = evaluate_opening_parallel(pool, &matrix, &[i, j])
                .map_err(|e| e.to_string())?;
            evaluated += 1;
            let words = vec![
                pool.word_at(i).text().to_string(),
                pool.word_at(j).text().to_string(),
            ];
            (words, score)
        }
    };

    Ok(SearchResult {
        best_words,
        best_score,
        candidates_considered: candidates,
        evaluated,
        pruned,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS_EN_5, pool_from_slice};

    #[test]
    fn finds_an_opening_in_a_small_pool() {
        let pool = pool_from_slice(&WORDS_EN_5[..40]);
        let result = search_best_opening(&pool, None, false).unwrap();

        assert_eq!(result.best_words.len(), 2);
        assert_ne!(result.best_words[0], result.best_words[1]);
        assert!(result.best_score.expected_bits > 0.0);
        assert!(result.best_score.expected_remaining >= 1.0);
    }

    #[test]
    fn limit_caps_the_candidate_list() {
        let pool = pool_from_slice(&WORDS_EN_5[..40]);
        let result = search_best_opening(&pool, Some(10), false).unwrap();

        assert_eq!(result.candidates_considered, 10);
        // 45 pairs, plus one extra evaluation if everything was pruned
        assert!(result.evaluated + result.pruned <= 46);
    }

    #[test]
    fn tiny_pool_is_rejected() {
        let pool = pool_from_slice(&WORDS_EN_5[..1]);
        assert!(search_best_opening(&pool, None, false).is_err());
    }

    #[test]
    fn every_pair_is_either_pruned_or_evaluated() {
        let pool = pool_from_slice(&WORDS_EN_5[..30]);
        let result = search_best_opening(&pool, None, false).unwrap();

        // The all-pruned fallback evaluates one extra pair
        let total_pairs = 30 * 29 / 2;
        assert!(result.evaluated + result.pruned >= total_pairs);
        assert!(result.evaluated >= 1);
    }
}
