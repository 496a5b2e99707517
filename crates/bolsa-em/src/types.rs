//! Data types for EastMoney data-center responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bolsa_traits::{AttentionPoint, DailyBar, QuarterGrowth};

/// Standard data-center envelope wrapping every report response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) success: bool,
    pub(crate) message: Option<String>,
    pub(crate) result: Option<DataPage<T>>,
}

/// One page of report rows.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataPage<T> {
    pub(crate) data: Vec<T>,
}

/// Parse a percentage field that may carry a trailing `%` sign.
///
/// Malformed values default to `0.0` rather than failing the whole row:
/// a single unreadable rate should degrade that one field, not the factor.
#[must_use]
pub fn parse_pct(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse()
        .unwrap_or(0.0)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    // Report dates arrive either bare or with a midnight time suffix.
    let date_part = value.split_whitespace().next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// One daily price row from the kline report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DailyBarRow {
    /// Trading date, `YYYY-MM-DD`.
    pub trade_date: String,
    /// Closing price.
    #[serde(default)]
    pub close_price: f64,
    /// Traded volume.
    #[serde(default)]
    pub deal_volume: f64,
}

impl DailyBarRow {
    /// Convert to the scoring-core bar type; rows without a parseable date
    /// are dropped upstream.
    #[must_use]
    pub fn to_bar(&self) -> Option<DailyBar> {
        Some(DailyBar {
            date: parse_date(&self.trade_date)?,
            close: self.close_price,
            volume: self.deal_volume,
        })
    }
}

/// One investor-attention row from the market-sentiment report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FocusRow {
    /// Observation date, `YYYY-MM-DD`.
    pub trade_date: String,
    /// Attention index value.
    #[serde(default)]
    pub focus_index: f64,
}

impl FocusRow {
    /// Convert to the scoring-core attention point.
    #[must_use]
    pub fn to_point(&self) -> Option<AttentionPoint> {
        Some(AttentionPoint {
            date: parse_date(&self.trade_date)?,
            focus_index: self.focus_index,
        })
    }
}

/// One quarterly growth row from the financial-abstract report.
///
/// Growth rates arrive as display strings (`"12.34%"`, `"--"`); conversion
/// applies the defaulting rules of [`parse_pct`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GrowthRow {
    /// Report period, `YYYY-MM-DD` of the period end.
    pub report_date: String,
    /// Core (deducted) net profit growth, year over year.
    #[serde(default)]
    pub deduct_profit_yoy: String,
    /// Net profit growth, year over year.
    #[serde(default)]
    pub parent_profit_yoy: String,
    /// Total revenue growth, year over year.
    #[serde(default)]
    pub total_revenue_yoy: String,
}

impl GrowthRow {
    /// Convert to the scoring-core quarterly growth record.
    #[must_use]
    pub fn to_quarter(&self) -> QuarterGrowth {
        QuarterGrowth {
            report_period: self.report_date.clone(),
            core_profit_yoy: parse_pct(&self.deduct_profit_yoy),
            net_profit_yoy: parse_pct(&self.parent_profit_yoy),
            revenue_yoy: parse_pct(&self.total_revenue_yoy),
        }
    }
}

/// One index-performance row, used for the market year-to-date change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct IndexPerformanceRow {
    /// Index code, e.g. `"000001"`.
    pub index_code: String,
    /// Year-to-date change, percent, as a display string.
    #[serde(default)]
    pub ytd_change_rate: String,
}

/// One security-info row, used for display-name lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SecurityInfoRow {
    /// Instrument code.
    pub security_code: String,
    /// Short display name.
    pub security_name_abbr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pct() {
        assert_eq!(parse_pct("12.34%"), 12.34);
        assert_eq!(parse_pct(" -7.5 % "), -7.5);
        assert_eq!(parse_pct("19.25"), 19.25);
        // Malformed fields default rather than fail.
        assert_eq!(parse_pct("--"), 0.0);
        assert_eq!(parse_pct(""), 0.0);
    }

    #[test]
    fn test_bar_row_conversion() {
        let row = DailyBarRow {
            trade_date: "2025-08-20 00:00:00".to_string(),
            close_price: 25.3,
            deal_volume: 1_200_000.0,
        };
        let bar = row.to_bar().unwrap();
        assert_eq!(bar.date.to_string(), "2025-08-20");
        assert_eq!(bar.close, 25.3);

        let bad = DailyBarRow {
            trade_date: "whenever".to_string(),
            close_price: 1.0,
            deal_volume: 1.0,
        };
        assert!(bad.to_bar().is_none());
    }

    #[test]
    fn test_growth_row_conversion() {
        let row = GrowthRow {
            report_date: "2025-06-30".to_string(),
            deduct_profit_yoy: "35.2%".to_string(),
            parent_profit_yoy: "--".to_string(),
            total_revenue_yoy: "8.1".to_string(),
        };
        let quarter = row.to_quarter();
        assert_eq!(quarter.core_profit_yoy, 35.2);
        assert_eq!(quarter.net_profit_yoy, 0.0);
        assert_eq!(quarter.revenue_yoy, 8.1);
    }

    #[test]
    fn test_envelope_deserializes() {
        let json = r#"{
            "success": true,
            "message": "ok",
            "result": { "data": [ { "TRADE_DATE": "2025-08-20", "FOCUS_INDEX": 84.2 } ] }
        }"#;
        let envelope: Envelope<FocusRow> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        let rows = envelope.result.unwrap().data;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].focus_index, 84.2);
    }
}
