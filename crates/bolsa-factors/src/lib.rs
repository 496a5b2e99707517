//! Factor implementations for the Bolsa stock-scoring toolkit.
//!
//! This crate provides the built-in scoring factors and the static registry
//! used to discover them:
//!
//! - Financial: quarterly growth-rate scoring with momentum adjustment
//! - Daily change: trend-regime-aware scoring of today's price move
//! - Attention: sustained investor attention with market correction
//!
//! Each factor is constructed for one instrument together with an
//! [`InstrumentData`](bolsa_traits::InstrumentData) handle and evaluated via
//! the fail-soft [`Factor`](bolsa_traits::Factor) contract.
//!
//! # Example
//!
//! ```ignore
//! use bolsa_factors::registry;
//!
//! let factors = registry::build_all("600660", &source);
//! for factor in &factors {
//!     let result = factor.evaluate();
//!     println!("{}: {}/{}", result.name, result.score, result.max_score);
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod attention;
pub mod daily_change;
pub mod financial;
pub mod registry;

// Re-export key types
pub use attention::{AttentionFactor, AttentionScore, attention_score};
pub use daily_change::{DailyChangeFactor, TrendRegime, trend_aware_change_score};
pub use financial::{FinancialFactor, FinancialFactorConfig, ItemScore, score_single_item};
pub use registry::{FactorInfo, available_factors};
