//! Coin catalog port.

use async_trait::async_trait;

use crate::domain::CatalogEntry;
use crate::error::Result;

/// Source of the provider's full coin catalog.
///
/// Implementations perform one bulk fetch per call; nothing is cached
/// between calls.
#[async_trait]
pub trait CoinCatalog: Send + Sync {
    /// Fetch every known catalog entry, in provider order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status or decoding failures.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>>;
}
