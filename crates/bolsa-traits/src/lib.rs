#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/bolsa-quant/bolsa/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the Bolsa stock-scoring toolkit.
//!
//! This crate provides the foundational abstractions for multi-factor stock
//! scoring: the factor capability interface, the evaluation result type, the
//! data-source boundary, and shared statistical helpers.

/// The version of the bolsa-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod factor;
pub mod result;
pub mod source;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{BolsaError, Result};
pub use factor::Factor;
pub use result::{DEFAULT_MAX_SCORE, FactorResult, Meta};
pub use source::InstrumentData;
pub use types::{AttentionPoint, DailyBar, Date, GrowthHistory, GrowthTriple, QuarterGrowth, Symbol};
