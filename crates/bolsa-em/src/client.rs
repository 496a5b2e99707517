//! EastMoney data-center client implementation.

use reqwest::Client;
use serde::de::DeserializeOwned;

use bolsa_traits::GrowthHistory;

use crate::{
    Result,
    error::EmError,
    types::{DailyBarRow, Envelope, FocusRow, GrowthRow, IndexPerformanceRow, SecurityInfoRow},
};

/// Base URL for the EastMoney data-center report API.
const EM_BASE_URL: &str = "https://datacenter-web.eastmoney.com/api/data/v1/get";

/// Market index whose year-to-date change corrects the attention score.
const MARKET_INDEX_CODE: &str = "000001";

/// EastMoney data-center API client.
#[derive(Debug, Clone)]
pub struct EmClient {
    client: Client,
    base_url: String,
}

impl Default for EmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EmClient {
    /// Create a client against the public data-center endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(EM_BASE_URL)
    }

    /// Create a client against an explicit base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client, honoring an `EM_BASE_URL` override from the
    /// environment or a `.env` file. Falls back to the public endpoint.
    #[must_use]
    pub fn from_env() -> Self {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        match std::env::var("EM_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url),
            _ => Self::new(),
        }
    }

    /// Build a report URL with the given filter and sort parameters.
    fn url(&self, report_name: &str, params: &str) -> String {
        format!("{}?reportName={report_name}&{params}", self.base_url)
    }

    /// Fetch one report and unwrap the data-center envelope.
    async fn get_rows<T: DeserializeOwned>(
        &self,
        report_name: &str,
        params: &str,
    ) -> Result<Vec<T>> {
        let url = self.url(report_name, params);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(EmError::Api(format!("HTTP {status}: {text}")));
        }

        let envelope: Envelope<T> = response.json().await?;
        if !envelope.success {
            return Err(EmError::Api(
                envelope.message.unwrap_or_else(|| "unknown failure".to_string()),
            ));
        }

        envelope
            .result
            .map(|page| page.data)
            .ok_or_else(|| EmError::NoData(report_name.to_string()))
    }

    /// Get the daily kline series for an instrument, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or yields no rows.
    pub async fn daily_bars(&self, code: &str, limit: usize) -> Result<Vec<bolsa_traits::DailyBar>> {
        let params = format!(
            "filter=(SECURITY_CODE%3D%22{code}%22)&sortColumns=TRADE_DATE&sortTypes=1&pageSize={limit}"
        );
        let rows: Vec<DailyBarRow> = self.get_rows("RPT_STOCK_KLINE_DAILY", &params).await?;

        let bars: Vec<_> = rows.iter().filter_map(DailyBarRow::to_bar).collect();
        if bars.is_empty() {
            return Err(EmError::NoData(code.to_string()));
        }
        Ok(bars)
    }

    /// Get the quarterly growth history for an instrument, sorted ascending
    /// by report period.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or yields no rows.
    pub async fn growth_history(&self, code: &str) -> Result<GrowthHistory> {
        let params = format!(
            "filter=(SECURITY_CODE%3D%22{code}%22)&sortColumns=REPORT_DATE&sortTypes=1&pageSize=8"
        );
        let rows: Vec<GrowthRow> = self
            .get_rows("RPT_FINANCE_QUARTER_GROWTH", &params)
            .await?;

        if rows.is_empty() {
            return Err(EmError::NoData(code.to_string()));
        }
        Ok(GrowthHistory::new(
            rows.iter().map(GrowthRow::to_quarter).collect(),
        ))
    }

    /// Get the investor-attention series for an instrument, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or yields no rows.
    pub async fn attention_series(
        &self,
        code: &str,
    ) -> Result<Vec<bolsa_traits::AttentionPoint>> {
        let params = format!(
            "filter=(SECURITY_CODE%3D%22{code}%22)&sortColumns=TRADE_DATE&sortTypes=1&pageSize=30"
        );
        let rows: Vec<FocusRow> = self.get_rows("RPT_DMSK_TS_STOCKFOCUS", &params).await?;

        let points: Vec<_> = rows.iter().filter_map(FocusRow::to_point).collect();
        if points.is_empty() {
            return Err(EmError::NoData(code.to_string()));
        }
        Ok(points)
    }

    /// Get the market index year-to-date change, percent.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the index is missing.
    pub async fn market_ytd_change(&self) -> Result<f64> {
        let params = format!("filter=(INDEX_CODE%3D%22{MARKET_INDEX_CODE}%22)&pageSize=1");
        let rows: Vec<IndexPerformanceRow> =
            self.get_rows("RPT_INDEX_PERFORMANCE", &params).await?;

        rows.first()
            .map(|row| crate::types::parse_pct(&row.ytd_change_rate))
            .ok_or_else(|| EmError::NoData(MARKET_INDEX_CODE.to_string()))
    }

    /// Look up the short display name for an instrument.
    ///
    /// # Errors
    ///
    /// Returns [`EmError::InstrumentNotFound`] for an unknown code.
    pub async fn instrument_name(&self, code: &str) -> Result<String> {
        let params = format!("filter=(SECURITY_CODE%3D%22{code}%22)&pageSize=1");
        let rows: Vec<SecurityInfoRow> = self.get_rows("RPT_SECURITY_INFO", &params).await?;

        rows.into_iter()
            .next()
            .map(|row| row.security_name_abbr)
            .ok_or_else(|| EmError::InstrumentNotFound(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = EmClient::new();
        assert_eq!(
            client.url("RPT_SECURITY_INFO", "pageSize=1"),
            "https://datacenter-web.eastmoney.com/api/data/v1/get?reportName=RPT_SECURITY_INFO&pageSize=1"
        );
    }

    #[test]
    fn test_base_url_override() {
        let client = EmClient::with_base_url("http://localhost:9000/api");
        assert!(
            client
                .url("RPT_STOCK_KLINE_DAILY", "pageSize=25")
                .starts_with("http://localhost:9000/api?reportName=")
        );
    }
}
