//! Weighted aggregation over a common 0–100 scale.

use bolsa_traits::{DEFAULT_MAX_SCORE, FactorResult, stats::round_to};

use crate::aggregator::{AggregateResult, Aggregator, FactorContribution};

/// Weight-normalizing aggregator.
///
/// Factors arrive on heterogeneous local scales (0–10, 0–20, ...), so every
/// score is first rescaled to 0–100 via `score / max_score * 100`; only then
/// are the weights applied. Weights need not sum to 1 — they are normalized
/// per call, and a zero weight sum falls back to equal weighting rather than
/// dividing by zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedAggregator;

impl WeightedAggregator {
    /// Create the aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn scaled_score(result: &FactorResult) -> f64 {
        let max_score = if result.max_score > 0.0 {
            result.max_score
        } else {
            DEFAULT_MAX_SCORE
        };
        result.score / max_score * 100.0
    }
}

impl Aggregator for WeightedAggregator {
    fn aggregate(&self, results: &[FactorResult]) -> AggregateResult {
        if results.is_empty() {
            return AggregateResult::empty();
        }

        let weight_sum: f64 = results.iter().map(|r| r.weight).sum();
        let equal_weight = 1.0 / results.len() as f64;

        let details: Vec<FactorContribution> = results
            .iter()
            .map(|result| {
                let norm_weight = if weight_sum == 0.0 {
                    equal_weight
                } else {
                    result.weight / weight_sum
                };
                FactorContribution {
                    result: result.clone(),
                    norm_weight,
                    scaled_score: Self::scaled_score(result),
                }
            })
            .collect();

        let total: f64 = details
            .iter()
            .map(|d| d.scaled_score * d.norm_weight)
            .sum();

        AggregateResult {
            total_score: round_to(total, 2),
            details,
        }
    }

    fn name(&self) -> &str {
        "weighted"
    }
}
