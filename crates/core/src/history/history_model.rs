//! Historical price series models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tickerfolio_market_data::Resolution;

use crate::constants::{DEFAULT_HISTORY_DAYS, SECONDS_PER_DAY};
use crate::errors::{Result, ValidationError};
use crate::positions::normalize_symbol;

/// One typed bar of a normalized series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPoint {
    /// Bar start, epoch seconds UTC.
    pub timestamp: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

/// A chronological series: timestamps strictly increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    pub symbol: String,
    pub resolution: Resolution,
    pub points: Vec<HistoricalPoint>,
}

impl History {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&HistoricalPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&HistoricalPoint> {
        self.points.last()
    }
}

/// A request for one symbol's bars between two epoch-second bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRequest {
    pub symbol: String,
    pub resolution: Resolution,
    pub from_epoch: i64,
    pub to_epoch: i64,
}

impl HistoryRequest {
    /// Window of `days` ending at `now`.
    pub fn trailing(
        symbol: &str,
        resolution: Resolution,
        days: i64,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        if days <= 0 {
            return Err(ValidationError::InvalidInput(format!(
                "history window must span at least one day, got {}",
                days
            ))
            .into());
        }
        let to_epoch = now.timestamp();
        let span = days
            .checked_mul(SECONDS_PER_DAY)
            .ok_or_else(|| ValidationError::Overflow("history window".to_string()))?;
        Ok(Self {
            symbol: normalize_symbol(symbol)?,
            resolution,
            from_epoch: to_epoch.saturating_sub(span),
            to_epoch,
        })
    }

    /// The default chart window: daily bars over the last
    /// [`DEFAULT_HISTORY_DAYS`] days.
    pub fn default_window(symbol: &str, now: DateTime<Utc>) -> Result<Self> {
        Self::trailing(symbol, Resolution::Daily, DEFAULT_HISTORY_DAYS, now)
    }

    pub fn validate(&self) -> Result<()> {
        if self.from_epoch > self.to_epoch {
            return Err(ValidationError::InvalidInput(format!(
                "history window starts after it ends ({} > {})",
                self.from_epoch, self.to_epoch
            ))
            .into());
        }
        Ok(())
    }
}
