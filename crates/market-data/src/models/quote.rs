use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Point-in-time market quote for one symbol.
///
/// Quotes are ephemeral: fetched on demand, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Canonical (uppercase) symbol the quote was requested for
    pub symbol: String,

    /// Last traded / closing price
    pub price: Decimal,

    /// Change versus previous close, in price units
    pub absolute_change: Decimal,

    /// Change versus previous close, in percent
    pub percent_change: Decimal,

    pub day_high: Decimal,
    pub day_low: Decimal,
    pub day_open: Decimal,
    pub previous_close: Decimal,

    /// Traded volume; zero when the provider omits it
    pub volume: u64,

    /// Instant the quote was retrieved
    pub as_of: DateTime<Utc>,
}

impl Quote {
    /// Create a quote carrying only a price. The day range collapses onto it.
    pub fn from_price(symbol: impl Into<String>, price: Decimal, as_of: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            absolute_change: Decimal::ZERO,
            percent_change: Decimal::ZERO,
            day_high: price,
            day_low: price,
            day_open: price,
            previous_close: price,
            volume: 0,
            as_of,
        }
    }

    /// Direction of the day's move, derived from `absolute_change`.
    pub fn day_direction(&self) -> Direction {
        Direction::of(self.absolute_change)
    }
}
