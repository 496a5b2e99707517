//! Daily price-change factor scored against the prevailing trend regime.
//!
//! The same percentage move reads very differently depending on context: a
//! big rally inside an already-strong uptrend carries reversal risk, while
//! the same rally after a strong downtrend looks like a capitulation
//! reversal. The base tables below encode that, with volume confirmation and
//! near-limit overrides layered on top.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use bolsa_traits::{
    BolsaError, Factor, FactorResult, InstrumentData, Result,
    stats::{round_to, trailing_mean},
};

/// Short moving-average window for regime classification.
pub const SHORT_WINDOW: usize = 5;

/// Long moving-average window for regime classification; also the minimum
/// price history the factor requires.
pub const LONG_WINDOW: usize = 20;

/// Half-open percentage-change bins shared by all regime tables.
const CHANGE_BINS: [(f64, f64); 6] = [
    (-10.0, -7.0),
    (-7.0, -3.0),
    (-3.0, 0.0),
    (0.0, 3.0),
    (3.0, 7.0),
    (7.0, 10.0),
];

/// Base score when the change falls outside every bin.
const DEFAULT_BASE: f64 = 5.0;

/// Discrete trend classification from the 5/20 moving-average ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendRegime {
    /// Short MA more than 5% above the long MA.
    StrongUp,
    /// Short MA above the long MA by up to 5%.
    WeakUp,
    /// Short MA below the long MA by up to 5%.
    WeakDown,
    /// Short MA more than 5% below the long MA.
    StrongDown,
}

impl TrendRegime {
    /// Classify the trailing close series into a regime.
    ///
    /// A pure function of the last [`LONG_WINDOW`] closes: identical input
    /// always yields an identical regime.
    ///
    /// # Errors
    ///
    /// Returns [`BolsaError::InsufficientHistory`] for fewer than
    /// [`LONG_WINDOW`] points.
    pub fn classify(closes: &[f64]) -> Result<Self> {
        let insufficient = || BolsaError::InsufficientHistory {
            needed: LONG_WINDOW,
            got: closes.len(),
        };
        let ma_short = trailing_mean(closes, SHORT_WINDOW).ok_or_else(insufficient)?;
        let ma_long = trailing_mean(closes, LONG_WINDOW).ok_or_else(insufficient)?;

        let strength = (ma_short - ma_long) / ma_long;

        Ok(if strength > 0.05 {
            Self::StrongUp
        } else if strength > 0.0 {
            Self::WeakUp
        } else if strength > -0.05 {
            Self::WeakDown
        } else {
            Self::StrongDown
        })
    }

    /// Stable identifier for display and meta payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StrongUp => "strong_up",
            Self::WeakUp => "weak_up",
            Self::WeakDown => "weak_down",
            Self::StrongDown => "strong_down",
        }
    }

    /// Base score per change bin for this regime.
    const fn base_scores(&self) -> [f64; 6] {
        match self {
            // Any further gain inside a strong uptrend invites a reversal.
            Self::StrongUp => [8.0, 6.0, 4.0, 1.0, 1.0, 0.0],
            // Continued gentle progress is the healthy case here.
            Self::WeakUp => [7.0, 5.0, 3.0, 4.0, 6.0, 3.0],
            // Late-downtrend rallies are opportunities.
            Self::WeakDown => [6.0, 4.0, 2.0, 5.0, 7.0, 8.0],
            // A surge after a rout is the strongest signal of all.
            Self::StrongDown => [9.0, 7.0, 3.0, 6.0, 8.0, 9.0],
        }
    }
}

/// Score a single day's percentage change against its trend regime.
///
/// `volume_ratio` is today's volume over the trailing 20-day average.
/// The output is an integer in `[0, 10]`.
#[must_use]
pub fn trend_aware_change_score(
    today_change: f64,
    regime: TrendRegime,
    volume_ratio: f64,
) -> u8 {
    let scores = regime.base_scores();
    let mut base = DEFAULT_BASE;
    for ((low, high), score) in CHANGE_BINS.iter().zip(scores.iter()) {
        if *low <= today_change && today_change < *high {
            base = *score;
            break;
        }
    }

    // High-volume contra-trend moves confirm the signal.
    let mut volume_factor = 1.0;
    if volume_ratio > 2.0 {
        let down_regime = matches!(regime, TrendRegime::StrongDown | TrendRegime::WeakDown);
        if (down_regime && today_change > 3.0)
            || (regime == TrendRegime::StrongUp && today_change < -3.0)
        {
            volume_factor = 1.2;
        }
    }

    // Near limit-up/limit-down the regime dominates everything else.
    if today_change.abs() > 9.5 {
        if regime == TrendRegime::StrongDown && today_change > 9.0 {
            base = 10.0;
        } else if regime == TrendRegime::StrongUp && today_change < -9.0 {
            base = 1.0;
        }
    }

    (base * volume_factor).clamp(0.0, 10.0).round() as u8
}

/// Daily-change factor for one instrument.
pub struct DailyChangeFactor {
    code: String,
    source: Arc<dyn InstrumentData>,
}

impl std::fmt::Debug for DailyChangeFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DailyChangeFactor")
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

impl DailyChangeFactor {
    /// Create the factor for an instrument.
    #[must_use]
    pub fn new(code: impl Into<String>, source: Arc<dyn InstrumentData>) -> Self {
        Self {
            code: code.into(),
            source,
        }
    }

    /// The mid-scale result returned when price history is too short to
    /// classify a regime.
    fn short_history_result(&self, got: usize) -> FactorResult {
        FactorResult::new(self.name(), DEFAULT_BASE)
            .with_max_score(self.max_score())
            .with_weight(self.weight())
            .with_meta(
                "note",
                format!("insufficient history: {got} of {LONG_WINDOW} bars, default score"),
            )
    }
}

impl Factor for DailyChangeFactor {
    fn name(&self) -> &str {
        "daily_change"
    }

    fn description(&self) -> &str {
        "Trend-regime-aware scoring of today's price change"
    }

    fn max_score(&self) -> f64 {
        10.0
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn compute(&self) -> Result<FactorResult> {
        let bars = self.source.daily_bars(&self.code)?;
        if bars.is_empty() {
            return Err(BolsaError::DataUnavailable(format!(
                "no price bars for {}",
                self.code
            )));
        }
        if bars.len() < LONG_WINDOW {
            return Ok(self.short_history_result(bars.len()));
        }

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

        let last = closes[closes.len() - 1];
        let prev = closes[closes.len() - 2];
        if prev <= 0.0 {
            return Err(BolsaError::MalformedField(format!(
                "non-positive previous close {prev}"
            )));
        }
        let today_change = (last - prev) / prev * 100.0;

        let regime = TrendRegime::classify(&closes)?;

        let volume_ratio = match trailing_mean(&volumes, LONG_WINDOW) {
            Some(avg) if avg > 0.0 => volumes[volumes.len() - 1] / avg,
            _ => 1.0,
        };

        let score = trend_aware_change_score(today_change, regime, volume_ratio);

        Ok(FactorResult::new(self.name(), f64::from(score))
            .with_max_score(self.max_score())
            .with_weight(self.weight())
            .with_meta("regime", regime.as_str())
            .with_meta("today_change", round_to(today_change, 2))
            .with_meta("volume_ratio", round_to(volume_ratio, 2)))
    }
}
