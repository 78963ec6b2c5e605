//! Weighted composition of factor scores.

use crate::score::FactorScores;
use crate::strategy::Weights;

/// Combine the four factor scores into one priority score, clamped to
/// [0, 100] and rounded to two decimals.
pub fn compose(scores: &FactorScores, weights: &Weights) -> f64 {
    let total = scores.urgency.value * weights.urgency
        + scores.importance.value * weights.importance
        + scores.effort.value * weights.effort
        + scores.dependency.value * weights.dependency;

    round2(total.clamp(0.0, 100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
