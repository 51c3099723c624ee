//! CoinGecko REST API client.
//!
//! Serves both outbound ports from one HTTP client:
//! - [`CoinCatalog`] via `GET /coins/list`
//! - [`PriceSource`] via `GET /simple/price?ids=..&vs_currencies=..`
//!
//! Every request is bounded by the configured timeout.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::dto::{CoinListItem, SimplePriceResponse};
use super::settings::CoinGeckoConfig;
use crate::domain::{CatalogEntry, CoinId};
use crate::error::Result;
use crate::port::{CoinCatalog, PriceSource};

/// HTTP client for the CoinGecko v3 API.
pub struct CoinGeckoClient {
    http: HttpClient,
    base_url: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl CoinGeckoClient {
    /// Create a client with default timeouts against `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&CoinGeckoConfig {
            api_url: base_url.into(),
            ..CoinGeckoConfig::default()
        })
    }

    #[must_use]
    pub fn from_config(config: &CoinGeckoConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_with_retry<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url).query(query).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let response = response.error_for_status()?;

            match response.json::<T>().await {
                Ok(parsed) => return Ok(parsed),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

#[async_trait]
impl CoinCatalog for CoinGeckoClient {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>> {
        let url = self.url("coins/list");
        let items: Vec<CoinListItem> = self.get_with_retry(&url, &[]).await?;
        debug!(count = items.len(), "Fetched coin catalog");
        Ok(items.into_iter().map(CatalogEntry::from).collect())
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    async fn fetch_prices(&self, ids: &[CoinId], currency: &str) -> Result<HashMap<CoinId, f64>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let joined = ids.iter().map(CoinId::as_str).collect::<Vec<_>>().join(",");
        let currency = currency.to_lowercase();
        let url = self.url("simple/price");
        let response: SimplePriceResponse = self
            .get_with_retry(&url, &[("ids", &joined), ("vs_currencies", &currency)])
            .await?;

        let prices: HashMap<CoinId, f64> = response
            .into_iter()
            .filter_map(|(id, quotes)| {
                quotes
                    .get(&currency)
                    .copied()
                    .flatten()
                    .map(|price| (CoinId::new(id), price))
            })
            .collect();
        debug!(requested = ids.len(), priced = prices.len(), "Fetched prices");
        Ok(prices)
    }
}
