//! Point-in-time snapshot of everything the scoring core needs for one
//! instrument.
//!
//! Fetching is asynchronous and happens once, up front; the snapshot then
//! serves the synchronous [`InstrumentData`] contract so factor evaluation
//! stays pure and single-threaded. A failed fetch is stored as its error
//! text and resurfaces per accessor, which lets each factor fail soft on
//! exactly the data it needs while the others proceed.

use bolsa_traits::{
    AttentionPoint, BolsaError, DailyBar, GrowthHistory, InstrumentData,
    Result as CoreResult,
};

use crate::EmClient;

/// How many daily bars to pull; comfortably above the 20-bar minimum the
/// trend scorer needs.
const BAR_LOOKBACK: usize = 60;

/// Pre-fetched per-instrument data bundle.
#[derive(Debug, Clone)]
pub struct Snapshot {
    code: String,
    name: Option<String>,
    bars: Result<Vec<DailyBar>, String>,
    growth: Result<GrowthHistory, String>,
    attention: Result<Vec<AttentionPoint>, String>,
    market_ytd: Result<f64, String>,
}

impl Snapshot {
    /// Fetch all required series for one instrument in parallel.
    ///
    /// Individual fetch failures are captured, not propagated; only the
    /// instrument-name lookup distinguishes a bad code, and even that
    /// degrades to `None`.
    pub async fn fetch(client: &EmClient, code: &str) -> Self {
        let (name, bars, growth, attention, market_ytd) = tokio::join!(
            client.instrument_name(code),
            client.daily_bars(code, BAR_LOOKBACK),
            client.growth_history(code),
            client.attention_series(code),
            client.market_ytd_change(),
        );

        Self {
            code: code.to_string(),
            name: name.ok(),
            bars: bars.map_err(|e| e.to_string()),
            growth: growth.map_err(|e| e.to_string()),
            attention: attention.map_err(|e| e.to_string()),
            market_ytd: market_ytd.map_err(|e| e.to_string()),
        }
    }

    /// Build a snapshot directly from already-fetched series.
    #[must_use]
    pub fn from_parts(
        code: impl Into<String>,
        name: Option<String>,
        bars: Vec<DailyBar>,
        growth: GrowthHistory,
        attention: Vec<AttentionPoint>,
        market_ytd: f64,
    ) -> Self {
        Self {
            code: code.into(),
            name,
            bars: Ok(bars),
            growth: Ok(growth),
            attention: Ok(attention),
            market_ytd: Ok(market_ytd),
        }
    }

    /// The instrument code this snapshot was fetched for.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Short display name, when the lookup succeeded.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

fn stored<T: Clone>(value: &Result<T, String>) -> CoreResult<T> {
    value
        .as_ref()
        .map(Clone::clone)
        .map_err(|e| BolsaError::DataFetch(e.clone()))
}

impl InstrumentData for Snapshot {
    fn daily_bars(&self, _code: &str) -> CoreResult<Vec<DailyBar>> {
        stored(&self.bars)
    }

    fn growth_history(&self, _code: &str) -> CoreResult<GrowthHistory> {
        stored(&self.growth)
    }

    fn attention_series(&self, _code: &str) -> CoreResult<Vec<AttentionPoint>> {
        stored(&self.attention)
    }

    fn market_ytd_change(&self) -> CoreResult<f64> {
        stored(&self.market_ytd)
    }
}
