//! Twelve Data API response models.
//!
//! Only the fields the engine consumes are modelled. Numbers arrive as
//! strings and are parsed later with full decimal precision.

use serde::Deserialize;
use serde_json::Value;

/// Error envelope shared by every endpoint: `{"code": 429, "status": "error", "message": ...}`
#[derive(Debug, Deserialize)]
pub struct TwelveDataStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `/quote` response
#[derive(Debug, Deserialize)]
pub struct TwelveDataQuote {
    pub close: String,
    #[serde(default)]
    pub change: Option<String>,
    #[serde(default)]
    pub percent_change: Option<String>,
    #[serde(default)]
    pub high: Option<String>,
    #[serde(default)]
    pub low: Option<String>,
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub previous_close: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
}

/// `/time_series` response
#[derive(Debug, Deserialize)]
pub struct TwelveDataTimeSeries {
    #[serde(default)]
    pub values: Vec<TwelveDataBar>,
}

/// One `/time_series` row, newest first
#[derive(Debug, Deserialize)]
pub struct TwelveDataBar {
    pub datetime: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    #[serde(default)]
    pub volume: Option<String>,
}

/// `/symbol_search` response
#[derive(Debug, Deserialize)]
pub struct TwelveDataSearch {
    #[serde(default)]
    pub data: Vec<TwelveDataSearchMatch>,
}

#[derive(Debug, Deserialize)]
pub struct TwelveDataSearchMatch {
    pub symbol: String,
    #[serde(default)]
    pub instrument_name: Option<String>,
    #[serde(default)]
    pub instrument_type: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// `/profile` response
#[derive(Debug, Deserialize)]
pub struct TwelveDataProfile {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Sent as a number by some plans and as a string by others.
    #[serde(default)]
    pub market_cap: Option<Value>,
}
