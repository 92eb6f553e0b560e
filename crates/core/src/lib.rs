//! Tickerfolio Core - positions, favorites, quote aggregation, valuation and
//! history normalization.
//!
//! Storage-agnostic: persistence is reached through the repository traits,
//! upstream market data through the source traits of
//! `tickerfolio-market-data`.
//!
//! ```text
//! PositionService -> QuoteAggregator -> valuate -> PortfolioValuation
//! HistoryService  -> normalize       -> History
//! ```

pub mod constants;
pub mod errors;
pub mod favorites;
pub mod history;
pub mod portfolio;
pub mod positions;
pub mod quotes;

pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
