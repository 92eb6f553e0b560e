//! Market data source trait definitions.
//!
//! The core engine consumes upstream data through these narrow contracts
//! so that providers can be swapped, and mocked in tests, without touching
//! valuation or normalization logic.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, Quote, RawHistoryPoint, Resolution, SearchResult};

/// Source of live, point-in-time quotes.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tickerfolio_market_data::{MarketDataError, Quote, QuoteSource};
///
/// struct FixedPrice;
///
/// #[async_trait]
/// impl QuoteSource for FixedPrice {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
///         Ok(Quote::from_price(symbol, rust_decimal::Decimal::ONE, chrono::Utc::now()))
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Unique identifier for this source, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a canonical symbol.
    ///
    /// One attempt per call. Rate limiting, unknown symbols, transport and
    /// parse problems are all reported through `MarketDataError`.
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}

/// Source of raw historical price series.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch raw rows for `symbol` between two epoch-second bounds.
    ///
    /// Rows are returned as the upstream delivers them (newest first,
    /// textual fields). An empty vector means "no data", not failure.
    async fn history(
        &self,
        symbol: &str,
        resolution: Resolution,
        from_epoch: i64,
        to_epoch: i64,
    ) -> Result<Vec<RawHistoryPoint>, MarketDataError>;
}

/// Instrument discovery: ticker search and company profiles.
#[async_trait]
pub trait SymbolSearch: Send + Sync {
    /// Search for symbols matching the query.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError>;

    /// Fetch company profile information.
    async fn profile(&self, symbol: &str) -> Result<CompanyProfile, MarketDataError>;
}
