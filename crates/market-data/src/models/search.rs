//! Search result models for symbol lookup.

use serde::{Deserialize, Serialize};

/// Result from a ticker/symbol search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Symbol/ticker (e.g., "AAPL", "SHOP")
    pub symbol: String,

    /// Display name (e.g., "Apple Inc"); falls back to the symbol
    pub instrument_name: String,

    /// Instrument type (e.g., "Common Stock", "ETF")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_type: Option<String>,

    /// Country/region of listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl SearchResult {
    /// Create a new search result with required fields.
    pub fn new(symbol: impl Into<String>, instrument_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            instrument_name: instrument_name.into(),
            instrument_type: None,
            region: None,
        }
    }

    pub fn with_type(mut self, instrument_type: impl Into<String>) -> Self {
        self.instrument_type = Some(instrument_type.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}
