use crate::detector::score::DetectionCandidate;
use crate::detector::types::LanguageResult;

/// Converts raw scores into a confidence distribution and ranks it.
///
/// Base-10 softmax relative to the best raw score: a candidate one
/// decade of mean log10 probability behind the leader gets one tenth the
/// leader's unnormalized mass (scaled by `sharpness`). Monotonic in the
/// raw scores, so ranking by confidence equals ranking by raw score;
/// ties fall back to catalog order for reproducibility.
pub fn normalize(candidates: Vec<DetectionCandidate>, sharpness: f64) -> Vec<LanguageResult> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let best = candidates
        .iter()
        .map(|c| c.raw_score)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut results: Vec<LanguageResult> = candidates
        .into_iter()
        .map(|c| LanguageResult {
            language: c.language,
            confidence: 10f64.powf(sharpness * (c.raw_score - best)),
        })
        .collect();

    let total: f64 = results.iter().map(|r| r.confidence).sum();
    for r in &mut results {
        r.confidence /= total;
    }

    results.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.language.cmp(&b.language))
    });
    results
}

/// All results at or above the threshold; the distribution is already
/// sorted, so this is a prefix cut.
pub fn threshold_view(results: &[LanguageResult], threshold: f64) -> Vec<LanguageResult> {
    results
        .iter()
        .take_while(|r| r.confidence >= threshold)
        .cloned()
        .collect()
}

/// The N highest-confidence results; fewer when fewer scored.
pub fn top_view(results: &[LanguageResult], n: usize) -> Vec<LanguageResult> {
    results.iter().take(n).cloned().collect()
}

/// The argmax, or None on an empty distribution.
pub fn best_view(results: &[LanguageResult]) -> Option<LanguageResult> {
    results.first().cloned()
}
