//! Quote aggregation.
//!
//! - [`quotes_model`] - per-symbol outcomes ([`QuoteResult`], [`UpstreamFailure`])
//! - [`quote_aggregator`] - concurrent fan-out over a [`QuoteSource`]
//!
//! ```text
//! positions -> QuoteAggregator -> QuoteSource (one call per distinct symbol)
//!                   |
//!                   v
//!        symbol -> QuoteResult (Ok | Failed)
//! ```
//!
//! [`QuoteSource`]: tickerfolio_market_data::QuoteSource

mod quote_aggregator;
mod quotes_model;

pub use quote_aggregator::QuoteAggregator;
pub use quotes_model::{quote_key, QuoteResult, UpstreamFailure};
