//! Tier comparison command
//!
//! The equivalence harness as a CLI surface: builds the hint matrix with
//! every tier, scores a spread of openings with every evaluator tier, and
//! reports agreement per tier.

use crate::core::WordPool;
use crate::evaluator::EvaluatorTier;
use crate::matrix::{BuilderTier, HintMatrix};
use rand::seq::index::sample;

use super::benchmark::SCORE_REL_TOL;

/// Agreement outcome per tier
pub struct TierAgreement {
    pub tier: &'static str,
    pub agrees: bool,
}

/// Report of a full cross-tier comparison
pub struct CompareReport {
    pub pool_size: usize,
    pub builder_agreement: Vec<TierAgreement>,
    pub evaluator_agreement: Vec<TierAgreement>,
    pub openings_checked: usize,
    pub all_agree: bool,
}

/// Compare every tier against the reference implementations
///
/// Checks all five builder tiers pairwise against the reference matrix,
/// then runs `openings` random openings (sizes cycling 1..=4) through all
/// four evaluator tiers.
///
/// # Errors
/// Returns an error if any evaluator tier fails outright; disagreement is
/// reported in the result, not as an error.
pub fn run_compare(pool: &WordPool, openings: usize) -> Result<CompareReport, String> {
    let reference_matrix = BuilderTier::Reference.build(pool);

    let builder_agreement: Vec<TierAgreement> = BuilderTier::ALL
        .into_iter()
        .map(|tier| {
            let matrix = tier.build(pool);
            TierAgreement {
                tier: tier.name(),
                agrees: reference_matrix.equivalent(&matrix),
            }
        })
        .collect();

    let (evaluator_agreement, openings_checked) =
        compare_evaluators(pool, &reference_matrix, openings)?;

    let all_agree = builder_agreement
        .iter()
        .chain(&evaluator_agreement)
        .all(|t| t.agrees);

    Ok(CompareReport {
        pool_size: pool.len(),
        builder_agreement,
        evaluator_agreement,
        openings_checked,
        all_agree,
    })
}

fn compare_evaluators(
    pool: &WordPool,
    matrix: &HintMatrix,
    openings: usize,
) -> Result<(Vec<TierAgreement>, usize), String> {
    let mut agreement: Vec<TierAgreement> = EvaluatorTier::ALL
        .into_iter()
        .map(|tier| TierAgreement {
            tier: tier.name(),
            agrees: true,
        })
        .collect();

    let mut checked = 0;
    for round in 0..openings {
        let size = (round % 4 + 1).min(pool.len());
        if size == 0 {
            break;
        }
        let opening: Vec<usize> = sample(&mut rand::rng(), pool.len(), size).into_vec();

        let baseline = EvaluatorTier::Reference
            .evaluate(pool, matrix, &opening)
            .map_err(|e| e.to_string())?;

        for (slot, tier) in EvaluatorTier::ALL.into_iter().enumerate() {
            let score = tier
                .evaluate(pool, matrix, &opening)
                .map_err(|e| e.to_string())?;
            if !baseline.approx_eq(score, SCORE_REL_TOL) {
                agreement[slot].agrees = false;
            }
        }
        checked += 1;
    }

    Ok((agreement, checked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS_EN_5, pool_from_slice};

    #[test]
    fn all_tiers_agree_on_real_words() {
        let pool = pool_from_slice(&WORDS_EN_5[..40]);
        let report = run_compare(&pool, 6).unwrap();

        assert!(report.all_agree);
        assert_eq!(report.openings_checked, 6);
        assert_eq!(report.builder_agreement.len(), 5);
        assert_eq!(report.evaluator_agreement.len(), 4);
    }

    #[test]
    fn single_word_pool_compares_cleanly() {
        let pool = pool_from_slice(&WORDS_EN_5[..1]);
        let report = run_compare(&pool, 3).unwrap();
        assert!(report.all_agree);
    }
}
