//! Scripted price source.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::CoinId;
use crate::error::{Error, Result};
use crate::port::PriceSource;

/// Price source with canned quotes that records every request.
///
/// Only requested identifiers with a canned quote are returned, mirroring a
/// provider that silently omits unknown ids.
#[derive(Debug, Default)]
pub struct ScriptedPriceSource {
    quotes: HashMap<CoinId, f64>,
    failing: bool,
    requests: Mutex<Vec<Vec<CoinId>>>,
}

impl ScriptedPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every request fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_price(mut self, id: &str, price: f64) -> Self {
        self.quotes.insert(CoinId::from(id), price);
        self
    }

    /// Identifier batches requested so far, one entry per request.
    pub fn requests(&self) -> Vec<Vec<CoinId>> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl PriceSource for ScriptedPriceSource {
    async fn fetch_prices(&self, ids: &[CoinId], _currency: &str) -> Result<HashMap<CoinId, f64>> {
        self.requests.lock().push(ids.to_vec());
        if self.failing {
            return Err(Error::Connection("scripted price failure".to_string()));
        }
        Ok(ids
            .iter()
            .filter_map(|id| self.quotes.get(id).map(|price| (id.clone(), *price)))
            .collect())
    }
}
