//! Batched price lookup port.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::CoinId;
use crate::error::Result;

/// Source of current fiat prices keyed by provider identifier.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch prices for all `ids` in a single request.
    ///
    /// The result may be partial: identifiers the provider has no data for
    /// are absent rather than reported as errors.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status or decoding failures.
    async fn fetch_prices(&self, ids: &[CoinId], currency: &str) -> Result<HashMap<CoinId, f64>>;
}
