//! Error types for the Bolsa toolkit.
//!
//! The taxonomy follows the fail-soft philosophy of the scoring core: most of
//! these errors are caught at the factor boundary and turned into a zero-score
//! [`FactorResult`](crate::FactorResult) with an explanatory `meta.error`
//! entry, never propagated past the factor that hit them.

use thiserror::Error;

/// The main error type for Bolsa operations.
#[derive(Debug, Error)]
pub enum BolsaError {
    /// The upstream data source returned nothing, or is missing required fields.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A value could not be parsed into the expected numeric type.
    #[error("Malformed field: {0}")]
    MalformedField(String),

    /// Not enough trailing history to run a computation.
    ///
    /// Treated the same as [`Self::DataUnavailable`] by the fail-soft
    /// contract; kept separate so the message can name the shortfall.
    #[error("Insufficient history: need {needed} points, got {got}")]
    InsufficientHistory {
        /// Minimum number of observations required.
        needed: usize,
        /// Number of observations actually available.
        got: usize,
    },

    /// A factor implementation failed to construct.
    #[error("Factor construction failed: {0}")]
    Discovery(String),

    /// A factor name has no entry in the registry.
    #[error("Factor not found: {0}")]
    FactorNotFound(String),

    /// Error fetching data from an external source.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for BolsaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for BolsaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Bolsa operations.
pub type Result<T> = std::result::Result<T, BolsaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BolsaError::DataUnavailable("no attention data".to_string());
        assert_eq!(err.to_string(), "Data unavailable: no attention data");

        let err = BolsaError::InsufficientHistory { needed: 20, got: 7 };
        assert_eq!(
            err.to_string(),
            "Insufficient history: need 20 points, got 7"
        );
    }

    #[test]
    fn test_error_from_string() {
        let err: BolsaError = "fail".into();
        assert!(matches!(err, BolsaError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());
    }
}
