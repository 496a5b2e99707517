//! Score aggregation for the Bolsa stock-scoring toolkit.
//!
//! This crate combines heterogeneous per-factor results into one normalized
//! composite score. The shipped strategy, [`WeightedAggregator`], rescales
//! every factor to a common 0–100 scale and applies per-call normalized
//! weights, with an equal-weight fallback when no weights are declared.
//!
//! # Examples
//!
//! ```rust
//! use bolsa_combine::{Aggregator, WeightedAggregator};
//! use bolsa_traits::FactorResult;
//!
//! let aggregator = WeightedAggregator::new();
//! let results = vec![
//!     FactorResult::new("a", 80.0).with_max_score(100.0).with_weight(0.5),
//!     FactorResult::new("b", 60.0).with_max_score(100.0).with_weight(0.5),
//! ];
//!
//! let combined = aggregator.aggregate(&results);
//! assert_eq!(combined.total_score, 70.0);
//! ```

mod aggregator;
mod weighted;

// Re-export main types
pub use aggregator::{AggregateResult, Aggregator, FactorContribution};
pub use weighted::WeightedAggregator;
