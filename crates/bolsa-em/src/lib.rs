//! EastMoney data-center client for Bolsa.
//!
//! This crate provides the concrete provider behind the scoring core's
//! data-source boundary: daily price bars, quarterly growth rates, the
//! investor-attention index, and the market index year-to-date change.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bolsa_em::{EmClient, Snapshot};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = EmClient::from_env();
//!
//!     // Fetch everything for one instrument up front...
//!     let snapshot = Snapshot::fetch(&client, "600660").await;
//!
//!     // ...then score synchronously through the InstrumentData contract.
//! }
//! ```
//!
//! # Environment Variables
//!
//! `EM_BASE_URL` (optional, also read from a `.env` file) overrides the
//! public data-center endpoint, which is useful for pointing the client at
//! a local fixture server.

mod client;
mod error;
mod snapshot;
mod types;

pub use client::EmClient;
pub use error::EmError;
pub use snapshot::Snapshot;
pub use types::{DailyBarRow, FocusRow, GrowthRow, IndexPerformanceRow, SecurityInfoRow, parse_pct};

/// Result type for EastMoney operations.
pub type Result<T> = std::result::Result<T, EmError>;
