use thiserror::Error;
use tickerfolio_market_data::{canonical_symbol, MarketDataError, Quote, RetryClass};

/// Key under which a symbol's [`QuoteResult`] is stored: the canonical
/// symbol, or the trimmed uppercase text when the symbol is malformed.
pub fn quote_key(raw: &str) -> String {
    canonical_symbol(raw).unwrap_or_else(|_| raw.trim().to_uppercase())
}

/// A quote request that failed for one symbol.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Quote for {symbol} unavailable: {cause}")]
pub struct UpstreamFailure {
    pub symbol: String,
    #[source]
    pub cause: MarketDataError,
}

impl UpstreamFailure {
    pub fn new(symbol: impl Into<String>, cause: MarketDataError) -> Self {
        Self {
            symbol: symbol.into(),
            cause,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.cause.is_rate_limited()
    }

    /// Whether asking again later can succeed for this symbol.
    pub fn retry_class(&self) -> RetryClass {
        self.cause.retry_class()
    }

    pub fn is_retryable(&self) -> bool {
        self.retry_class() != RetryClass::Never
    }
}

/// Outcome of resolving one symbol. A failure never affects other symbols.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteResult {
    Ok(Quote),
    Failed(UpstreamFailure),
}

impl QuoteResult {
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            QuoteResult::Ok(quote) => Some(quote),
            QuoteResult::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&UpstreamFailure> {
        match self {
            QuoteResult::Ok(_) => None,
            QuoteResult::Failed(failure) => Some(failure),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, QuoteResult::Ok(_))
    }
}

impl From<std::result::Result<Quote, UpstreamFailure>> for QuoteResult {
    fn from(result: std::result::Result<Quote, UpstreamFailure>) -> Self {
        match result {
            Ok(quote) => QuoteResult::Ok(quote),
            Err(failure) => QuoteResult::Failed(failure),
        }
    }
}
