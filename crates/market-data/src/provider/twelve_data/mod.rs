//! Twelve Data provider implementation.
//!
//! # API Endpoints
//!
//! - Latest quote: `{base}/quote?symbol={symbol}`
//! - Historical bars: `{base}/time_series?symbol={symbol}&interval={interval}&start_date=..&end_date=..`
//! - Search: `{base}/symbol_search?symbol={query}`
//! - Profile: `{base}/profile?symbol={symbol}`
//!
//! # Response Format
//!
//! Every numeric field is a string. Failures usually come back as HTTP 200
//! with a body `{"status": "error", "code": <http-like code>, "message": ...}`;
//! `code == 429` means the plan's rate limit was hit.

mod models;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::TwelveDataConfig;
use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, Quote, RawHistoryPoint, Resolution, SearchResult};
use crate::parsing::{parse_decimal, parse_volume};
use crate::provider::{HistorySource, QuoteSource, SymbolSearch};

use models::{
    TwelveDataProfile, TwelveDataQuote, TwelveDataSearch, TwelveDataStatus, TwelveDataTimeSeries,
};

const PROVIDER_ID: &str = "TWELVE_DATA";

/// Maximum number of search matches returned to callers.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Twelve Data replies with this message when a range simply has no bars.
const NO_DATA_MESSAGE: &str = "No data is available";

/// Twelve Data provider for quotes, history, search and profiles.
///
/// # Example
///
/// ```ignore
/// let provider = TwelveDataProvider::new(TwelveDataConfig::from_env());
/// let quote = provider.latest_quote("AAPL").await?;
/// ```
pub struct TwelveDataProvider {
    client: Client,
    config: TwelveDataConfig,
}

impl TwelveDataProvider {
    pub fn new(config: TwelveDataConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// GET an endpoint and return its JSON body after status classification.
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        symbol: Option<&str>,
    ) -> Result<Value, MarketDataError> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        debug!("Twelve Data request: {} {:?}", endpoint, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::from(e)
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        let text = response.text().await?;
        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) if status.is_success() => {
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Failed to parse response: {}", e),
                });
            }
            Err(_) => {
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("HTTP error: {}", status),
                });
            }
        };

        classify_body(&body, symbol)?;
        Ok(body)
    }
}

/// Map Twelve Data's in-body error envelope onto `MarketDataError`.
///
/// The rate-limit code is checked before the generic error status so that
/// callers can tell a 429 apart from a bad symbol.
fn classify_body(body: &Value, symbol: Option<&str>) -> Result<(), MarketDataError> {
    let envelope = match TwelveDataStatus::deserialize(body) {
        Ok(envelope) => envelope,
        // Not an object (e.g. a bare array); nothing to classify.
        Err(_) => return Ok(()),
    };

    if envelope.code == Some(429) {
        return Err(MarketDataError::RateLimited {
            provider: PROVIDER_ID.to_string(),
        });
    }

    if envelope.status.as_deref() != Some("error") {
        return Ok(());
    }

    let message = envelope
        .message
        .unwrap_or_else(|| "Invalid stock symbol or no data available".to_string());

    match (envelope.code, symbol) {
        (Some(400) | Some(404), Some(symbol)) if !message.contains(NO_DATA_MESSAGE) => {
            Err(MarketDataError::SymbolNotFound(symbol.to_string()))
        }
        _ => Err(MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message,
        }),
    }
}

fn decode<T: for<'de> Deserialize<'de>>(body: Value) -> Result<T, MarketDataError> {
    serde_json::from_value(body).map_err(|e| MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message: format!("Failed to parse response: {}", e),
    })
}

/// Convert a `/quote` payload into a [`Quote`].
///
/// `close` is required. Missing change fields read as zero, missing day
/// range fields collapse onto the price, and a missing volume reads as zero.
fn to_quote(symbol: &str, raw: TwelveDataQuote, as_of: DateTime<Utc>) -> Result<Quote, MarketDataError> {
    let price = parse_decimal(&raw.close).ok_or_else(|| MarketDataError::ValidationFailed {
        message: format!("Unparseable close '{}' for {}", raw.close, symbol),
    })?;

    let or_price = |field: &Option<String>| field.as_deref().and_then(parse_decimal).unwrap_or(price);
    let or_zero =
        |field: &Option<String>| field.as_deref().and_then(parse_decimal).unwrap_or(Decimal::ZERO);

    Ok(Quote {
        symbol: symbol.to_string(),
        price,
        absolute_change: or_zero(&raw.change),
        percent_change: or_zero(&raw.percent_change),
        day_high: or_price(&raw.high),
        day_low: or_price(&raw.low),
        day_open: or_price(&raw.open),
        previous_close: or_price(&raw.previous_close),
        volume: parse_volume(raw.volume.as_deref()).unwrap_or(0),
        as_of,
    })
}

fn interval(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::OneMinute => "1min",
        Resolution::FiveMinutes => "5min",
        Resolution::FifteenMinutes => "15min",
        Resolution::OneHour => "1h",
        Resolution::Daily => "1day",
        Resolution::Weekly => "1week",
        Resolution::Monthly => "1month",
    }
}

/// Format epoch seconds as the `YYYY-MM-DD` date Twelve Data expects.
fn epoch_to_date(epoch: i64) -> Result<String, MarketDataError> {
    DateTime::<Utc>::from_timestamp(epoch, 0)
        .map(|instant| instant.format("%Y-%m-%d").to_string())
        .ok_or_else(|| MarketDataError::ValidationFailed {
            message: format!("Invalid timestamp: {}", epoch),
        })
}

fn to_search_results(raw: TwelveDataSearch) -> Vec<SearchResult> {
    raw.data
        .into_iter()
        .take(SEARCH_RESULT_LIMIT)
        .map(|item| {
            let name = item
                .instrument_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| item.symbol.clone());
            let mut result = SearchResult::new(item.symbol, name);
            result.instrument_type = item.instrument_type;
            result.region = item.country;
            result
        })
        .collect()
}

fn to_profile(raw: TwelveDataProfile) -> CompanyProfile {
    let market_cap = match raw.market_cap {
        Some(Value::String(text)) => parse_decimal(&text),
        Some(Value::Number(number)) => parse_decimal(&number.to_string()),
        _ => None,
    };

    CompanyProfile {
        name: raw.name,
        symbol: raw.symbol,
        exchange: raw.exchange,
        sector: raw.sector,
        industry: raw.industry,
        country: raw.country,
        currency: raw.currency,
        description: raw.description,
        market_cap,
    }
}

#[async_trait]
impl QuoteSource for TwelveDataProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let body = self
            .fetch("quote", &[("symbol", symbol)], Some(symbol))
            .await?;
        let raw: TwelveDataQuote = decode(body)?;
        to_quote(symbol, raw, Utc::now())
    }
}

#[async_trait]
impl HistorySource for TwelveDataProvider {
    async fn history(
        &self,
        symbol: &str,
        resolution: Resolution,
        from_epoch: i64,
        to_epoch: i64,
    ) -> Result<Vec<RawHistoryPoint>, MarketDataError> {
        let start_date = epoch_to_date(from_epoch)?;
        let end_date = epoch_to_date(to_epoch)?;

        let params = [
            ("symbol", symbol),
            ("interval", interval(resolution)),
            ("start_date", start_date.as_str()),
            ("end_date", end_date.as_str()),
        ];

        let body = match self.fetch("time_series", &params, Some(symbol)).await {
            Ok(body) => body,
            Err(MarketDataError::ProviderError { message, .. })
                if message.contains(NO_DATA_MESSAGE) =>
            {
                debug!("No history for {} between {} and {}", symbol, start_date, end_date);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let series: TwelveDataTimeSeries = decode(body)?;
        Ok(series
            .values
            .into_iter()
            .map(|bar| RawHistoryPoint {
                datetime: bar.datetime,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
            })
            .collect())
    }
}

#[async_trait]
impl SymbolSearch for TwelveDataProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let body = self.fetch("symbol_search", &[("symbol", query)], None).await?;
        let raw: TwelveDataSearch = decode(body)?;
        if raw.data.is_empty() {
            warn!("Symbol search for '{}' returned no matches", query);
        }
        Ok(to_search_results(raw))
    }

    async fn profile(&self, symbol: &str) -> Result<CompanyProfile, MarketDataError> {
        let body = self
            .fetch("profile", &[("symbol", symbol)], Some(symbol))
            .await?;
        let raw: TwelveDataProfile = decode(body)?;
        Ok(to_profile(raw))
    }
}
