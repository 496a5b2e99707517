//! Common types used throughout the Bolsa toolkit.
//!
//! These model the fixed data contract the scoring core requires from any
//! provider: a daily price/volume series, a short history of year-over-year
//! growth rates per financial metric, and a daily investor-attention series.

use serde::{Deserialize, Serialize};

use crate::{BolsaError, Result};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// An instrument identifier, e.g. `"600660"`.
pub type Symbol = String;

/// One daily price bar: date, closing price, traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date.
    pub date: Date,
    /// Closing price.
    pub close: f64,
    /// Traded volume (shares or lots, provider-defined; only ratios matter).
    pub volume: f64,
}

/// One observation of the daily investor-attention index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttentionPoint {
    /// Observation date.
    pub date: Date,
    /// Attention index value, typically in the 60..100 range.
    pub focus_index: f64,
}

/// Year-over-year growth rates from one quarterly report.
///
/// All rates are percentages and may be negative. Unparseable upstream
/// values default to `0.0` at the provider boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterGrowth {
    /// Report period identifier, sortable as a string (e.g. `"2025Q2"`).
    pub report_period: String,
    /// Core (deducted) net profit growth, percent.
    pub core_profit_yoy: f64,
    /// Net profit growth, percent.
    pub net_profit_yoy: f64,
    /// Total revenue growth, percent.
    pub revenue_yoy: f64,
}

/// Quarterly growth history for one instrument, sorted ascending by period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthHistory {
    /// Reports, oldest first.
    pub quarters: Vec<QuarterGrowth>,
}

impl GrowthHistory {
    /// Build a history, sorting the reports ascending by period.
    #[must_use]
    pub fn new(mut quarters: Vec<QuarterGrowth>) -> Self {
        quarters.sort_by(|a, b| a.report_period.cmp(&b.report_period));
        Self { quarters }
    }

    /// Extract the growth triple for one metric from the last three reports.
    ///
    /// # Errors
    ///
    /// Returns [`BolsaError::InsufficientHistory`] when fewer than three
    /// reports are present.
    pub fn triple(&self, metric: impl Fn(&QuarterGrowth) -> f64) -> Result<GrowthTriple> {
        let n = self.quarters.len();
        if n < 3 {
            return Err(BolsaError::InsufficientHistory { needed: 3, got: n });
        }
        Ok(GrowthTriple::new(
            metric(&self.quarters[n - 3]),
            metric(&self.quarters[n - 2]),
            metric(&self.quarters[n - 1]),
        ))
    }

    /// Core-profit growth triple.
    pub fn core_profit(&self) -> Result<GrowthTriple> {
        self.triple(|q| q.core_profit_yoy)
    }

    /// Net-profit growth triple.
    pub fn net_profit(&self) -> Result<GrowthTriple> {
        self.triple(|q| q.net_profit_yoy)
    }

    /// Revenue growth triple.
    pub fn revenue(&self) -> Result<GrowthTriple> {
        self.triple(|q| q.revenue_yoy)
    }
}

/// An ascending 3-point year-over-year growth-rate sequence for one metric.
///
/// Invariant: chronological order is oldest first; callers sort by report
/// period before constructing this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthTriple {
    /// Growth rate two periods ago, percent.
    pub two_ago: f64,
    /// Growth rate one period ago, percent.
    pub one_ago: f64,
    /// Most recent growth rate, percent.
    pub current: f64,
}

impl GrowthTriple {
    /// Create a triple from oldest to newest rate.
    #[must_use]
    pub const fn new(two_ago: f64, one_ago: f64, current: f64) -> Self {
        Self {
            two_ago,
            one_ago,
            current,
        }
    }

    /// Whether the series is strictly improving period over period.
    #[must_use]
    pub fn strictly_increasing(&self) -> bool {
        self.current > self.one_ago && self.one_ago > self.two_ago
    }

    /// Whether the series is strictly worsening period over period.
    #[must_use]
    pub fn strictly_decreasing(&self) -> bool {
        self.current < self.one_ago && self.one_ago < self.two_ago
    }
}
