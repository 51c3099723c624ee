//! Scripted coin catalog.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::CatalogEntry;
use crate::error::{Error, Result};
use crate::port::CoinCatalog;

/// Catalog that returns a fixed list, or always fails.
#[derive(Debug, Default)]
pub struct ScriptedCatalog {
    entries: Vec<CatalogEntry>,
    failing: bool,
    fetches: AtomicUsize,
}

impl ScriptedCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// A catalog whose every fetch fails like a network error would.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoinCatalog for ScriptedCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(Error::Connection("scripted catalog failure".to_string()));
        }
        Ok(self.entries.clone())
    }
}
