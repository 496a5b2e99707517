//! Core trait definition for score aggregators.

use serde::Serialize;

use bolsa_traits::FactorResult;

/// One factor's contribution to a composite, as seen by the aggregator.
///
/// `norm_weight` and `scaled_score` are derived per aggregation call and
/// never cached between calls.
#[derive(Debug, Clone, Serialize)]
pub struct FactorContribution {
    /// The factor's own result, unchanged.
    pub result: FactorResult,

    /// Weight after normalization across all supplied factors.
    pub norm_weight: f64,

    /// Score rescaled to the common 0–100 scale.
    pub scaled_score: f64,
}

/// A composite score built from a set of factor results.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Weight-normalized composite on the common 0–100 scale, rounded to
    /// 2 decimal places.
    pub total_score: f64,

    /// Per-factor contributions in input order.
    pub details: Vec<FactorContribution>,
}

impl AggregateResult {
    /// The empty composite: no factors, zero score.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_score: 0.0,
            details: Vec::new(),
        }
    }
}

/// Combines heterogeneous factor results into one composite score.
///
/// Aggregation is total: it must accept any input, including an empty list
/// and factors that failed soft, and never error or panic.
pub trait Aggregator: Send + Sync {
    /// Aggregate the supplied factor results into a composite.
    fn aggregate(&self, results: &[FactorResult]) -> AggregateResult;

    /// Name of this aggregation strategy.
    fn name(&self) -> &str;
}
