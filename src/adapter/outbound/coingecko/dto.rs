//! CoinGecko response payloads.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::CatalogEntry;

/// One element of `GET /coins/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinListItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

impl From<CoinListItem> for CatalogEntry {
    fn from(item: CoinListItem) -> Self {
        CatalogEntry::new(item.id, item.symbol, item.name)
    }
}

/// Body of `GET /simple/price`: `{id: {currency: price}}`.
///
/// Prices are optional because the API reports `null` for coins it lists
/// but cannot price.
pub type SimplePriceResponse = HashMap<String, HashMap<String, Option<f64>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_list_deserializes_and_ignores_extra_fields() {
        let json = r#"[
            {"id": "bitcoin", "symbol": "btc", "name": "Bitcoin"},
            {"id": "tether", "symbol": "usdt", "name": "Tether", "platforms": {}}
        ]"#;

        let items: Vec<CoinListItem> = serde_json::from_str(json).unwrap();
        let entries: Vec<CatalogEntry> = items.into_iter().map(Into::into).collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], CatalogEntry::new("tether", "usdt", "Tether"));
    }

    #[test]
    fn simple_price_accepts_null_and_missing_currency() {
        let json = r#"{
            "bitcoin": {"usd": 50000.1234},
            "dead-coin": {"usd": null},
            "odd-coin": {}
        }"#;

        let response: SimplePriceResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response["bitcoin"]["usd"], Some(50000.1234));
        assert_eq!(response["dead-coin"]["usd"], None);
        assert!(response["odd-coin"].is_empty());
    }
}
