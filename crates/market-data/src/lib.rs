//! Tickerfolio Market Data Crate
//!
//! Provider-agnostic contracts for upstream market data, plus a Twelve Data
//! implementation.
//!
//! # Architecture
//!
//! ```text
//! +------------------+       +----------------------+
//! |   core engine    | ----> | QuoteSource          |  latest quote per symbol
//! | (aggregator,     |       | HistorySource        |  raw newest-first rows
//! |  normalizer)     |       | SymbolSearch         |  search + profile
//! +------------------+       +----------------------+
//!                                      |
//!                                      v
//!                            +----------------------+
//!                            |  TwelveDataProvider  |  (reqwest)
//!                            +----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Quote`] - Point-in-time quote
//! - [`RawHistoryPoint`] - Unparsed historical row
//! - [`Direction`] - Gain / loss / neutral classification
//! - [`MarketDataError`] - Upstream failure taxonomy

pub mod config;
pub mod errors;
pub mod models;
pub mod parsing;
pub mod provider;

pub use config::TwelveDataConfig;
pub use errors::{MarketDataError, RetryClass};
pub use models::{
    canonical_symbol, CompanyProfile, Direction, Quote, RawHistoryPoint, Resolution, SearchResult,
};
pub use provider::twelve_data::TwelveDataProvider;
pub use provider::{HistorySource, QuoteSource, SymbolSearch};
