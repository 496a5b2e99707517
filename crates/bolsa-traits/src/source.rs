//! The data-source boundary the scoring core depends on.

use crate::{AttentionPoint, DailyBar, GrowthHistory, Result};

/// Synchronous access to per-instrument market and fundamental data.
///
/// The scoring core treats the provider as a black box with this fixed
/// contract; how the data is fetched, cached, or rate-limited is entirely
/// the implementor's concern. Every accessor may fail, and factors are
/// required to contain those failures (see
/// [`Factor::evaluate`](crate::Factor::evaluate)).
pub trait InstrumentData: Send + Sync {
    /// Daily price bars, oldest first. Trend classification needs at least
    /// 20 trailing points.
    ///
    /// # Errors
    ///
    /// Returns an error when the series cannot be produced.
    fn daily_bars(&self, code: &str) -> Result<Vec<DailyBar>>;

    /// Quarterly year-over-year growth history, sorted ascending by period.
    ///
    /// # Errors
    ///
    /// Returns an error when the history cannot be produced.
    fn growth_history(&self, code: &str) -> Result<GrowthHistory>;

    /// Daily investor-attention index series, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the series cannot be produced.
    fn attention_series(&self, code: &str) -> Result<Vec<AttentionPoint>>;

    /// Market index year-to-date change, percent.
    ///
    /// # Errors
    ///
    /// Returns an error when the figure cannot be produced.
    fn market_ytd_change(&self) -> Result<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BolsaError;

    struct EmptySource;

    impl InstrumentData for EmptySource {
        fn daily_bars(&self, code: &str) -> Result<Vec<DailyBar>> {
            Err(BolsaError::DataUnavailable(format!("no bars for {code}")))
        }

        fn growth_history(&self, code: &str) -> Result<GrowthHistory> {
            Err(BolsaError::DataUnavailable(format!(
                "no financials for {code}"
            )))
        }

        fn attention_series(&self, code: &str) -> Result<Vec<AttentionPoint>> {
            Err(BolsaError::DataUnavailable(format!(
                "no attention for {code}"
            )))
        }

        fn market_ytd_change(&self) -> Result<f64> {
            Ok(0.0)
        }
    }

    #[test]
    fn test_source_is_object_safe() {
        let source: Box<dyn InstrumentData> = Box::new(EmptySource);
        assert!(source.daily_bars("600660").is_err());
        assert_eq!(source.market_ytd_change().unwrap(), 0.0);
    }
}
