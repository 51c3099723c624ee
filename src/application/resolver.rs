//! Free-text coin resolution against the provider catalog.
//!
//! A query matches, in order:
//! 1. an entry whose symbol or id equals the query, ignoring case;
//! 2. an entry whose display name contains the query, ignoring case.
//!
//! Within each pass the first entry in catalog order wins.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::{CatalogEntry, CoinId};
use crate::port::CoinCatalog;

/// How a catalog entry matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Symbol or id equal to the query.
    Exact,
    /// Display name containing the query.
    NameSubstring,
}

/// Search an already fetched catalog for `query`.
#[must_use]
pub fn find_in_catalog<'a>(
    entries: &'a [CatalogEntry],
    query: &str,
) -> Option<(&'a CatalogEntry, MatchKind)> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let exact = entries.iter().find(|entry| {
        entry.symbol.eq_ignore_ascii_case(query) || entry.id.as_str().eq_ignore_ascii_case(query)
    });
    if let Some(entry) = exact {
        return Some((entry, MatchKind::Exact));
    }

    let needle = query.to_uppercase();
    entries
        .iter()
        .find(|entry| entry.name.to_uppercase().contains(&needle))
        .map(|entry| (entry, MatchKind::NameSubstring))
}

/// Resolves coin names to provider identifiers.
///
/// Fetches the whole catalog on every call.
#[derive(Clone)]
pub struct CatalogResolver {
    catalog: Arc<dyn CoinCatalog>,
}

impl CatalogResolver {
    #[must_use]
    pub fn new(catalog: Arc<dyn CoinCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolve `query` to a provider identifier.
    ///
    /// Returns `None` when nothing matches or when the catalog could not be
    /// fetched; both cases are logged and never propagated.
    pub async fn resolve(&self, query: &str) -> Option<CoinId> {
        let entries = match self.catalog.fetch_catalog().await {
            Ok(entries) => entries,
            Err(e) => {
                error!(query, error = %e, "Failed to fetch coin catalog");
                return None;
            }
        };

        match find_in_catalog(&entries, query) {
            Some((entry, kind)) => {
                info!(query, id = %entry.id, ?kind, "Resolved coin");
                Some(entry.id.clone())
            }
            None => {
                warn!(query, catalog_size = entries.len(), "No coin found");
                None
            }
        }
    }
}
