//! Financial-growth factor based on quarterly year-over-year growth rates.
//!
//! Scores three metrics (core profit, net profit, revenue) from their
//! 3-quarter growth history: a tiered base score from the current rate, an
//! extra downside penalty for negative rates, and a momentum adjustment when
//! the series is strictly improving or worsening. Metric totals are summed
//! and the factor result is clamped to `[0, 20]`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use bolsa_traits::{
    Factor, FactorResult, GrowthTriple, InstrumentData, Result, stats::round_to,
};

/// Score breakdown for one financial metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemScore {
    /// Clamped total for the metric, 2-decimal rounded.
    pub total: f64,
    /// Momentum adjustment included in the total (`±0.2 × full_score` or 0).
    pub momentum: f64,
}

/// Score a single metric's growth triple against a `full_score` ceiling.
///
/// The base score is a monotone step function of the current rate
/// (tiers at 50/30/10/0/−10 percent). Negative rates take an additional
/// penalty proportional to how negative they are, floored at `-full_score`.
/// A strictly increasing triple earns `+0.2 × full_score` momentum, a
/// strictly decreasing one `-0.2 × full_score`. The total is clamped to
/// `[-full_score, full_score]`.
#[must_use]
pub fn score_single_item(triple: GrowthTriple, full_score: f64) -> ItemScore {
    let rate = triple.current;

    let mut base = if rate >= 50.0 {
        full_score
    } else if rate >= 30.0 {
        full_score * 0.8
    } else if rate >= 10.0 {
        full_score * 0.6
    } else if rate >= 0.0 {
        full_score * 0.4
    } else if rate >= -10.0 {
        full_score * 0.2
    } else {
        0.0
    };

    if rate < 0.0 {
        base += (rate / 10.0 * (full_score * 0.2)).max(-full_score);
    }

    let momentum = if triple.strictly_increasing() {
        0.2 * full_score
    } else if triple.strictly_decreasing() {
        -0.2 * full_score
    } else {
        0.0
    };

    let total = (base + momentum).clamp(-full_score, full_score);

    ItemScore {
        total: round_to(total, 2),
        momentum: round_to(momentum, 2),
    }
}

/// Configuration for the financial-growth factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialFactorConfig {
    /// Ceiling for the core-profit growth metric (default: 10).
    pub core_profit_full: f64,
    /// Ceiling for the net-profit growth metric (default: 5).
    pub net_profit_full: f64,
    /// Ceiling for the revenue growth metric (default: 5).
    pub revenue_full: f64,
}

impl Default for FinancialFactorConfig {
    fn default() -> Self {
        Self {
            core_profit_full: 10.0,
            net_profit_full: 5.0,
            revenue_full: 5.0,
        }
    }
}

impl FinancialFactorConfig {
    /// Combined ceiling across the three metrics.
    #[must_use]
    pub const fn total_full_score(&self) -> f64 {
        self.core_profit_full + self.net_profit_full + self.revenue_full
    }
}

/// Financial-growth factor for one instrument.
pub struct FinancialFactor {
    code: String,
    source: Arc<dyn InstrumentData>,
    config: FinancialFactorConfig,
}

impl std::fmt::Debug for FinancialFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinancialFactor")
            .field("code", &self.code)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FinancialFactor {
    /// Create the factor for an instrument with the default metric ceilings.
    #[must_use]
    pub fn new(code: impl Into<String>, source: Arc<dyn InstrumentData>) -> Self {
        Self::with_config(code, source, FinancialFactorConfig::default())
    }

    /// Create the factor with explicit metric ceilings.
    #[must_use]
    pub fn with_config(
        code: impl Into<String>,
        source: Arc<dyn InstrumentData>,
        config: FinancialFactorConfig,
    ) -> Self {
        Self {
            code: code.into(),
            source,
            config,
        }
    }
}

impl Factor for FinancialFactor {
    fn name(&self) -> &str {
        "financial"
    }

    fn description(&self) -> &str {
        "Quarterly growth-rate scoring with momentum adjustment"
    }

    fn max_score(&self) -> f64 {
        self.config.total_full_score()
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn compute(&self) -> Result<FactorResult> {
        let history = self.source.growth_history(&self.code)?;

        let core = score_single_item(history.core_profit()?, self.config.core_profit_full);
        let net = score_single_item(history.net_profit()?, self.config.net_profit_full);
        let revenue = score_single_item(history.revenue()?, self.config.revenue_full);

        // Individual metrics may go negative; the factor floor is 0.
        let total = (core.total + net.total + revenue.total).clamp(0.0, self.max_score());
        let trend_adj = round_to(core.momentum + net.momentum + revenue.momentum, 2);

        Ok(FactorResult::new(self.name(), round_to(total, 2))
            .with_max_score(self.max_score())
            .with_weight(self.weight())
            .with_meta("trend_adj", trend_adj)
            .with_meta(
                "detail",
                json!({
                    "core_profit": { "score": core.total, "momentum": core.momentum },
                    "net_profit": { "score": net.total, "momentum": net.momentum },
                    "revenue": { "score": revenue.total, "momentum": revenue.momentum },
                }),
            ))
    }
}
