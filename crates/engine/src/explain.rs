//! Human-readable breakdown of a composed score.

use crate::score::FactorScores;
use crate::strategy::Weights;

/// Render one line per factor: its qualitative label and its weighted
/// contribution to the final score. Most heavily weighted factor first;
/// the sort is stable, so equally weighted factors keep their base order
/// and output stays deterministic. Purely presentational.
pub fn build_explanation(scores: &FactorScores, weights: &Weights) -> String {
    let mut factors = [
        ("Urgency", &scores.urgency, weights.urgency),
        ("Importance", &scores.importance, weights.importance),
        ("Effort", &scores.effort, weights.effort),
        ("Dependencies", &scores.dependency, weights.dependency),
    ];
    factors.sort_by(|a, b| b.2.total_cmp(&a.2));

    factors
        .iter()
        .map(|(name, factor, weight)| {
            format!("{}: {} (+{:.1})", name, factor.detail, factor.value * weight)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
