//! CoinGecko API configuration.

use serde::Deserialize;

/// Public CoinGecko v3 API.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko REST client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinGeckoConfig {
    /// Base URL of the v3 API, without trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Fiat currency code prices are quoted in.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Attempts per request for timeouts and connect failures (1 = no retry).
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_currency() -> String {
    "usd".to_string()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    10_000
}

const fn default_retry_max_attempts() -> u32 {
    1
}

const fn default_retry_backoff_ms() -> u64 {
    500
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            currency: default_currency(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}
