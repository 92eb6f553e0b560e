//! Provider configuration loaded from the process environment.

use std::time::Duration;

/// Environment variable holding the Twelve Data API key.
pub const API_KEY_ENV: &str = "TWELVE_DATA_API_KEY";
/// Optional override of the API base URL (used against test servers).
pub const BASE_URL_ENV: &str = "TWELVE_DATA_BASE_URL";
/// Optional request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "TWELVE_DATA_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.twelvedata.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`TwelveDataProvider`](crate::TwelveDataProvider).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwelveDataConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl TwelveDataConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the configuration from environment variables.
    ///
    /// A missing key yields an empty string; the upstream then answers with
    /// an error body, which surfaces as a per-request provider error.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).unwrap_or_default();
        if api_key.is_empty() {
            log::warn!("{} is not set; upstream calls will be rejected", API_KEY_ENV);
        }

        let base_url = lookup(BASE_URL_ENV)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = lookup(TIMEOUT_ENV)
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            api_key,
            base_url,
            timeout,
        }
    }
}
