//! Error types for the EastMoney data-center client.

use thiserror::Error;

/// Errors that can occur when using the EastMoney data center.
#[derive(Debug, Error)]
pub enum EmError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// The API reported a failure.
    #[error("EastMoney API error: {0}")]
    Api(String),

    /// The instrument code matched nothing.
    #[error("Instrument not found: {0}")]
    InstrumentNotFound(String),

    /// No data rows were returned.
    #[error("No data available for {0}")]
    NoData(String),
}

impl From<EmError> for bolsa_traits::BolsaError {
    fn from(e: EmError) -> Self {
        Self::DataFetch(e.to_string())
    }
}
