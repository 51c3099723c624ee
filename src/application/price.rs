//! Batched price lookup by coin name.
//!
//! Names are resolved in two tiers: the well-known table below first, the
//! catalog search only for names it does not cover. All resolved
//! identifiers are then priced with a single request.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info, warn};

use super::resolver::CatalogResolver;
use crate::domain::{CoinId, CoinName, PriceTable};
use crate::port::PriceSource;

/// Tickers resolved without touching the catalog.
const WELL_KNOWN_IDS: [(&str, &str); 4] = [
    ("SOL", "solana"),
    ("ETH", "ethereum"),
    ("BTC", "bitcoin"),
    ("BNB", "binancecoin"),
];

/// Look `name` up in the well-known ticker table.
#[must_use]
pub fn well_known_id(name: &CoinName) -> Option<CoinId> {
    WELL_KNOWN_IDS
        .iter()
        .find(|(ticker, _)| *ticker == name.as_str())
        .map(|(_, id)| CoinId::from(*id))
}

/// Resolves coin names and fetches their current prices.
pub struct PriceService {
    source: Arc<dyn PriceSource>,
    resolver: CatalogResolver,
    currency: String,
}

impl PriceService {
    pub fn new(
        source: Arc<dyn PriceSource>,
        resolver: CatalogResolver,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            source,
            resolver,
            currency: currency.into(),
        }
    }

    /// Fiat currency code prices are quoted in.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    async fn resolve(&self, name: &CoinName) -> Option<CoinId> {
        if let Some(id) = well_known_id(name) {
            return Some(id);
        }
        self.resolver.resolve(name.as_str()).await
    }

    /// Current prices for `names`.
    ///
    /// Unresolvable names, names the provider has no price for, and every
    /// name of a failed request are simply missing from the result. When two
    /// names resolve to the same identifier only the later one is reported.
    pub async fn get_prices(&self, names: &[CoinName]) -> PriceTable {
        let mut prices = PriceTable::new();
        if names.is_empty() {
            return prices;
        }

        let mut ids: Vec<CoinId> = Vec::with_capacity(names.len());
        let mut id_to_name: HashMap<CoinId, CoinName> = HashMap::with_capacity(names.len());
        for name in names {
            let Some(id) = self.resolve(name).await else {
                warn!(coin = %name, "Could not find an identifier for coin");
                continue;
            };
            if !ids.contains(&id) {
                ids.push(id.clone());
            }
            id_to_name.insert(id, name.clone());
        }

        if ids.is_empty() {
            return prices;
        }

        let quotes = match self.source.fetch_prices(&ids, &self.currency).await {
            Ok(quotes) => quotes,
            Err(e) => {
                error!(error = %e, requested = ids.len(), "Failed to fetch prices");
                return prices;
            }
        };

        for (id, price) in quotes {
            if let Some(name) = id_to_name.get(&id) {
                info!(coin = %name, price, currency = %self.currency, "Fetched price");
                prices.insert(name.clone(), price);
            }
        }

        prices
    }
}
