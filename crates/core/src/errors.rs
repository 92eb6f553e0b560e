//! Core error types for the Tickerfolio engine.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to [`DatabaseError`] by whichever adapter implements the
//! repository traits.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::quotes::UpstreamFailure;
use tickerfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
///
/// Every variant is scoped to one mutation or one symbol; none of them is
/// fatal to the process.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The targeted record is missing or belongs to another owner.
    ///
    /// Both cases produce the same signal so callers cannot probe for the
    /// existence of other users' records.
    #[error("{0} not found or unauthorized")]
    NotFoundOrUnauthorized(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error(transparent)]
    Upstream(#[from] UpstreamFailure),
}

impl Error {
    /// Whether this error is an upstream rate-limit refusal.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Error::Upstream(failure) => failure.is_rate_limited(),
            Error::MarketData(err) => err.is_rate_limited(),
            _ => false,
        }
    }
}

/// Storage-agnostic error type for repository operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// A query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The (owner, symbol) uniqueness constraint was violated.
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and upstream data parsing.
///
/// Raised before any mutation, so nothing is ever partially applied.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid symbol: '{0}'")]
    InvalidSymbol(String),

    #[error("Share count must be positive, got {0}")]
    NonPositiveShares(Decimal),

    #[error("Price must not be negative, got {0}")]
    NegativePrice(Decimal),

    #[error("Amount out of range: {0}")]
    Overflow(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_does_not_reveal_owner() {
        let err = Error::NotFoundOrUnauthorized("Position".to_string());
        assert_eq!(err.to_string(), "Position not found or unauthorized");
    }

    #[test]
    fn test_rate_limited_detection() {
        let failure = UpstreamFailure::new(
            "AAPL",
            MarketDataError::RateLimited {
                provider: "TWELVE_DATA".to_string(),
            },
        );
        assert!(Error::from(failure).is_rate_limited());
        assert!(!Error::NotFoundOrUnauthorized("Favorite".to_string()).is_rate_limited());
    }
}
