//! Investor-attention factor.
//!
//! Rewards sustained, low-volatility attention over attention spikes. The
//! base score comes from the mean and standard deviation of a trailing
//! attention-index window, corrected by the market's year-to-date move; a
//! stability bonus tops it up when attention is both moderate and steady.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use bolsa_traits::{
    BolsaError, Factor, FactorResult, InstrumentData, Result,
    stats::{mean_std, round_to},
};

/// Trailing window of attention observations used for scoring.
pub const ATTENTION_WINDOW: usize = 20;

/// Score breakdown for one attention window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttentionScore {
    /// Final score, one decimal, in `[1, 10]`.
    pub score: f64,
    /// Window mean of the attention index.
    pub mean: f64,
    /// Window sample standard deviation.
    pub std: f64,
    /// Stability bonus included in the score.
    pub bonus: f64,
}

/// Score an attention-index window with a market-trend correction.
///
/// `market_change` is the index year-to-date change in percent, acting as a
/// tailwind/headwind term. Returns `None` for fewer than two observations,
/// where the sample deviation is undefined.
#[must_use]
pub fn attention_score(values: &[f64], market_change: f64) -> Option<AttentionScore> {
    let (mean, std) = mean_std(values)?;

    let base = ((mean - 80.0) / 2.0 - std / 4.0 + market_change / 10.0).clamp(0.0, 7.0);

    let bonus = if mean < 85.0 && std < 3.0 {
        2.5 - std / 3.0
    } else {
        0.0
    };

    let score = round_to((base + bonus).clamp(1.0, 10.0), 1);

    Some(AttentionScore {
        score,
        mean,
        std,
        bonus,
    })
}

/// Investor-attention factor for one instrument.
pub struct AttentionFactor {
    code: String,
    source: Arc<dyn InstrumentData>,
}

impl std::fmt::Debug for AttentionFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttentionFactor")
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

impl AttentionFactor {
    /// Create the factor for an instrument.
    #[must_use]
    pub fn new(code: impl Into<String>, source: Arc<dyn InstrumentData>) -> Self {
        Self {
            code: code.into(),
            source,
        }
    }
}

impl Factor for AttentionFactor {
    fn name(&self) -> &str {
        "attention"
    }

    fn description(&self) -> &str {
        "Sustained investor attention with market-trend correction"
    }

    fn max_score(&self) -> f64 {
        10.0
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn compute(&self) -> Result<FactorResult> {
        let series = self.source.attention_series(&self.code)?;
        let start = series.len().saturating_sub(ATTENTION_WINDOW);
        let window: Vec<f64> = series[start..].iter().map(|p| p.focus_index).collect();

        // A missing market figure degrades to no correction, not a failure.
        let market_change = self.source.market_ytd_change().unwrap_or(0.0);

        let scored = attention_score(&window, market_change).ok_or(
            BolsaError::InsufficientHistory {
                needed: 2,
                got: window.len(),
            },
        )?;

        Ok(FactorResult::new(self.name(), scored.score)
            .with_max_score(self.max_score())
            .with_weight(self.weight())
            .with_meta("mean_focus", round_to(scored.mean, 2))
            .with_meta("std_focus", round_to(scored.std, 2))
            .with_meta("stable_bonus", round_to(scored.bonus, 2))
            .with_meta("market_change", market_change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bolsa_traits::{AttentionPoint, DailyBar, Date, GrowthHistory};

    #[test]
    fn test_steady_moderate_attention_earns_bonus() {
        // Alternating 83/84: mean 83.5, low deviation, well under the
        // stability thresholds.
        let values: Vec<f64> = (0..20)
            .map(|i| if i % 2 == 0 { 83.0 } else { 84.0 })
            .collect();
        let scored = attention_score(&values, 0.0).unwrap();

        assert!(scored.bonus > 0.0);
        assert!(scored.score >= 1.0 && scored.score <= 10.0);
        assert_relative_eq!(scored.mean, 83.5);
    }

    #[test]
    fn test_spiky_attention_gets_no_bonus() {
        let values: Vec<f64> = (0..20)
            .map(|i| if i % 2 == 0 { 70.0 } else { 95.0 })
            .collect();
        let scored = attention_score(&values, 0.0).unwrap();
        assert_relative_eq!(scored.bonus, 0.0);
    }

    #[test]
    fn test_market_correction_shifts_base() {
        let values = vec![88.0; 19].into_iter().chain([89.0]).collect::<Vec<_>>();
        let flat = attention_score(&values, 0.0).unwrap();
        let tailwind = attention_score(&values, 20.0).unwrap();
        assert!(tailwind.score >= flat.score);
    }

    #[test]
    fn test_floor_and_ceiling() {
        // Very low, volatile attention: base clamps to 0, no stability
        // bonus, final floors at 1.
        let low = vec![55.0; 10].into_iter().chain([70.0; 10]).collect::<Vec<_>>();
        let scored = attention_score(&low, -30.0).unwrap();
        assert_relative_eq!(scored.score, 1.0);

        // Very high, perfectly steady attention with a strong tailwind
        // caps at 10.
        let mut high = vec![99.0; 19];
        high.push(99.5);
        let scored = attention_score(&high, 50.0).unwrap();
        assert!(scored.score <= 10.0);
    }

    #[test]
    fn test_single_observation_is_unscorable() {
        assert!(attention_score(&[90.0], 0.0).is_none());
        assert!(attention_score(&[], 0.0).is_none());
    }

    struct FixedAttention {
        points: Vec<AttentionPoint>,
        market: Result<f64>,
    }

    impl InstrumentData for FixedAttention {
        fn daily_bars(&self, _code: &str) -> Result<Vec<DailyBar>> {
            Err(BolsaError::DataUnavailable("not needed".to_string()))
        }

        fn growth_history(&self, _code: &str) -> Result<GrowthHistory> {
            Err(BolsaError::DataUnavailable("not needed".to_string()))
        }

        fn attention_series(&self, _code: &str) -> Result<Vec<AttentionPoint>> {
            Ok(self.points.clone())
        }

        fn market_ytd_change(&self) -> Result<f64> {
            match &self.market {
                Ok(v) => Ok(*v),
                Err(_) => Err(BolsaError::DataFetch("index quote failed".to_string())),
            }
        }
    }

    fn points(values: &[f64]) -> Vec<AttentionPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &focus_index)| AttentionPoint {
                date: Date::from_num_days_from_ce_opt(739000 + i as i32).unwrap(),
                focus_index,
            })
            .collect()
    }

    #[test]
    fn test_factor_uses_trailing_window() {
        // 30 points; only the last 20 (all 84.0) should be scored.
        let mut values = vec![40.0; 10];
        values.extend(vec![84.0; 19]);
        values.push(85.0);

        let factor = AttentionFactor::new(
            "600660",
            Arc::new(FixedAttention {
                points: points(&values),
                market: Ok(0.0),
            }),
        );
        let result = factor.evaluate();

        assert!(!result.is_failed());
        let mean = result.meta["mean_focus"].as_f64().unwrap();
        assert!((mean - 84.05).abs() < 1e-9);
    }

    #[test]
    fn test_factor_degrades_without_market_figure() {
        let factor = AttentionFactor::new(
            "600660",
            Arc::new(FixedAttention {
                points: points(&vec![84.0; 20]),
                market: Err(BolsaError::DataFetch("down".to_string())),
            }),
        );
        let result = factor.evaluate();

        assert!(!result.is_failed());
        assert_eq!(result.meta["market_change"], 0.0);
    }

    #[test]
    fn test_factor_fails_soft_on_short_series() {
        let factor = AttentionFactor::new(
            "600660",
            Arc::new(FixedAttention {
                points: points(&[84.0]),
                market: Ok(0.0),
            }),
        );
        let result = factor.evaluate();

        assert_eq!(result.score, 0.0);
        assert!(result.is_failed());
    }
}
