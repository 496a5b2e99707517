#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/bolsa-quant/bolsa/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # bolsa
//!
//! Umbrella crate re-exporting the Bolsa sub-crates behind one API.
//!
//! ## Architecture
//!
//! 1. The **registry** discovers the available factor implementations
//! 2. Each **factor** is instantiated for one instrument and evaluates to a
//!    bounded, weighted [`FactorResult`] — failing soft on bad data
//! 3. The **aggregator** rescales and weight-normalizes the results into a
//!    composite [`AggregateResult`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use bolsa::{Aggregator, InstrumentData, WeightedAggregator};
//! use bolsa::em::{EmClient, Snapshot};
//! use bolsa::factors::registry;
//!
//! # async fn example() {
//! let client = EmClient::from_env();
//! let source: Arc<dyn InstrumentData> =
//!     Arc::new(Snapshot::fetch(&client, "600660").await);
//!
//! let results: Vec<_> = registry::build_all("600660", &source)
//!     .iter()
//!     .map(|factor| factor.evaluate())
//!     .collect();
//!
//! let composite = WeightedAggregator::new().aggregate(&results);
//! println!("total: {}", composite.total_score);
//! # }
//! ```

/// Version information for the bolsa crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core trait definitions.
pub mod traits {
    pub use bolsa_traits::*;
}

/// Factor implementations and the static registry.
pub mod factors {
    pub use bolsa_factors::*;
}

/// Score aggregation strategies.
pub mod combine {
    pub use bolsa_combine::*;
}

/// EastMoney data-center client.
pub mod em {
    pub use bolsa_em::*;
}

// Re-export core traits and types at top level for convenience
pub use bolsa_combine::{AggregateResult, Aggregator, WeightedAggregator};
pub use bolsa_traits::{
    BolsaError, Factor, FactorResult, GrowthTriple, InstrumentData, Result, Symbol,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        AggregateResult, Aggregator, BolsaError, Factor, FactorResult, InstrumentData, Result,
        WeightedAggregator,
    };
    pub use bolsa_factors::registry::{available_factors, build_all};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_factor(_factor: &dyn Factor) {}
        fn _accept_aggregator(_aggregator: &dyn Aggregator) {}
        fn _accept_source(_source: &dyn InstrumentData) {}
        // If this compiles, re-exports are working
    }
}
