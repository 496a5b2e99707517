//! Static factor registry.
//!
//! New factors are added by appending an entry to [`available_factors`]; the
//! orchestrator never needs to know concrete type names. Each entry carries a
//! constructor so callers can instantiate every discovered factor for a given
//! instrument. Construction failures are reported and skipped, never allowed
//! to abort discovery of the rest.

use std::sync::Arc;

use bolsa_traits::{BolsaError, Factor, InstrumentData, Result};

use crate::{AttentionFactor, DailyChangeFactor, FinancialFactor};

/// Constructor signature shared by all registered factors.
pub type FactorBuilder = fn(&str, Arc<dyn InstrumentData>) -> Result<Box<dyn Factor>>;

/// Metadata and constructor for one registered factor.
#[derive(Debug, Clone, Copy)]
pub struct FactorInfo {
    /// Unique identifier for the factor.
    pub name: &'static str,

    /// Human-readable description.
    pub description: &'static str,

    /// Upper bound of the factor's score scale.
    pub max_score: f64,

    /// Default aggregation weight.
    pub default_weight: f64,

    /// Whether the factor needs quarterly fundamental data.
    pub requires_fundamentals: bool,

    builder: FactorBuilder,
}

impl FactorInfo {
    /// Instantiate this factor for an instrument.
    ///
    /// # Errors
    ///
    /// Returns an error when the factor cannot be constructed.
    pub fn build(&self, code: &str, source: Arc<dyn InstrumentData>) -> Result<Box<dyn Factor>> {
        (self.builder)(code, source)
    }
}

fn build_financial(code: &str, source: Arc<dyn InstrumentData>) -> Result<Box<dyn Factor>> {
    Ok(Box::new(FinancialFactor::new(code, source)))
}

fn build_daily_change(code: &str, source: Arc<dyn InstrumentData>) -> Result<Box<dyn Factor>> {
    Ok(Box::new(DailyChangeFactor::new(code, source)))
}

fn build_attention(code: &str, source: Arc<dyn InstrumentData>) -> Result<Box<dyn Factor>> {
    Ok(Box::new(AttentionFactor::new(code, source)))
}

/// All registered factors.
#[must_use]
pub fn available_factors() -> Vec<FactorInfo> {
    vec![
        FactorInfo {
            name: "financial",
            description: "Quarterly growth-rate scoring with momentum adjustment",
            max_score: 20.0,
            default_weight: 1.0,
            requires_fundamentals: true,
            builder: build_financial,
        },
        FactorInfo {
            name: "daily_change",
            description: "Trend-regime-aware scoring of today's price change",
            max_score: 10.0,
            default_weight: 1.0,
            requires_fundamentals: false,
            builder: build_daily_change,
        },
        FactorInfo {
            name: "attention",
            description: "Sustained investor attention with market-trend correction",
            max_score: 10.0,
            default_weight: 1.0,
            requires_fundamentals: false,
            builder: build_attention,
        },
    ]
}

/// Look up one registered factor by name.
#[must_use]
pub fn get_factor_info(name: &str) -> Option<FactorInfo> {
    available_factors().into_iter().find(|f| f.name == name)
}

/// Instantiate a registered factor by name for an instrument.
///
/// # Errors
///
/// Returns [`BolsaError::FactorNotFound`] for an unknown name, or the
/// constructor's error when building fails.
pub fn build_factor(
    name: &str,
    code: &str,
    source: Arc<dyn InstrumentData>,
) -> Result<Box<dyn Factor>> {
    get_factor_info(name)
        .ok_or_else(|| {
            BolsaError::FactorNotFound(format!(
                "unknown factor '{name}'; use `bolsa factors` to list available factors"
            ))
        })?
        .build(code, source)
}

/// Instantiate every registered factor for an instrument.
///
/// A factor whose constructor fails is reported on stderr and skipped;
/// discovery of the remaining factors always proceeds.
#[must_use]
pub fn build_all(code: &str, source: &Arc<dyn InstrumentData>) -> Vec<Box<dyn Factor>> {
    let mut factors = Vec::new();
    for info in available_factors() {
        match info.build(code, Arc::clone(source)) {
            Ok(factor) => factors.push(factor),
            Err(e) => {
                eprintln!("Warning: skipping factor {}: {e}", info.name);
            }
        }
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolsa_traits::{AttentionPoint, DailyBar, GrowthHistory};

    struct NoData;

    impl InstrumentData for NoData {
        fn daily_bars(&self, _code: &str) -> Result<Vec<DailyBar>> {
            Err(BolsaError::DataUnavailable("offline".to_string()))
        }

        fn growth_history(&self, _code: &str) -> Result<GrowthHistory> {
            Err(BolsaError::DataUnavailable("offline".to_string()))
        }

        fn attention_series(&self, _code: &str) -> Result<Vec<AttentionPoint>> {
            Err(BolsaError::DataUnavailable("offline".to_string()))
        }

        fn market_ytd_change(&self) -> Result<f64> {
            Err(BolsaError::DataUnavailable("offline".to_string()))
        }
    }

    #[test]
    fn test_available_factors() {
        let factors = available_factors();
        assert_eq!(factors.len(), 3);

        let names: Vec<_> = factors.iter().map(|f| f.name).collect();
        assert!(names.contains(&"financial"));
        assert!(names.contains(&"daily_change"));
        assert!(names.contains(&"attention"));
    }

    #[test]
    fn test_get_factor_info() {
        let info = get_factor_info("financial").unwrap();
        assert_eq!(info.max_score, 20.0);
        assert!(info.requires_fundamentals);

        assert!(get_factor_info("nonexistent").is_none());
    }

    #[test]
    fn test_build_factor_by_name() {
        let source: Arc<dyn InstrumentData> = Arc::new(NoData);
        let factor = build_factor("attention", "600660", Arc::clone(&source)).unwrap();
        assert_eq!(factor.name(), "attention");

        let missing = build_factor("nope", "600660", source);
        assert!(matches!(missing, Err(BolsaError::FactorNotFound(_))));
    }

    #[test]
    fn test_build_all_covers_registry() {
        let source: Arc<dyn InstrumentData> = Arc::new(NoData);
        let factors = build_all("600660", &source);
        assert_eq!(factors.len(), available_factors().len());
    }

    #[test]
    fn test_registry_metadata_matches_instances() {
        let source: Arc<dyn InstrumentData> = Arc::new(NoData);
        for info in available_factors() {
            let factor = info.build("600660", Arc::clone(&source)).unwrap();
            assert_eq!(factor.name(), info.name);
            assert_eq!(factor.max_score(), info.max_score);
            assert_eq!(factor.weight(), info.default_weight);
            assert_eq!(factor.description(), info.description);
        }
    }

    #[test]
    fn test_all_factors_fail_soft_without_data() {
        // An offline source must never make evaluation panic or error out;
        // every factor reports a contained failure instead.
        let source: Arc<dyn InstrumentData> = Arc::new(NoData);
        for factor in build_all("600660", &source) {
            let result = factor.evaluate();
            assert_eq!(result.score, 0.0);
            assert!(result.is_failed(), "{} did not fail soft", result.name);
        }
    }
}
