use crate::catalog::ModelCatalog;
use crate::config::DetectorConfig;
use crate::consts::MAX_NGRAM_ORDER;
use crate::detector::units::NgramInventory;
use crate::language::Language;
use rayon::prelude::*;

/// Transient per-query scoring result for one candidate language.
#[derive(Debug, Clone, Copy)]
pub struct DetectionCandidate {
    pub language: Language,
    pub raw_score: f64,
}

/// Scores every candidate language against the extracted n-grams.
///
/// The raw score is the weighted mean log10 probability over all grams:
/// per order, each gram contributes its model probability (or the unseen
/// floor), weighted by the order weight; the sum is normalized by the
/// weighted gram count so short and long inputs land on the same scale.
/// Candidates with no model in the catalog are skipped.
pub fn score_candidates(
    inventory: &NgramInventory,
    candidates: &[Language],
    catalog: &ModelCatalog,
    config: &DetectorConfig,
) -> Vec<DetectionCandidate> {
    if inventory.is_empty() {
        return Vec::new();
    }

    let weighted_total: f64 = (1..=MAX_NGRAM_ORDER)
        .map(|order| config.order_weights[order - 1] * inventory.order_grams(order).len() as f64)
        .sum();

    candidates
        .par_iter()
        .filter_map(|&language| {
            let model = catalog.model(language)?;
            let mut weighted_sum = 0.0;
            for order in 1..=MAX_NGRAM_ORDER {
                let weight = config.order_weights[order - 1];
                for gram in inventory.order_grams(order) {
                    weighted_sum += weight * model.log_prob(order, gram, config.unseen_logp);
                }
            }
            Some(DetectionCandidate {
                language,
                raw_score: weighted_sum / weighted_total,
            })
        })
        .collect()
}
