//! Coin identity types.
//!
//! Users talk about coins by ticker (`BTC`), the price provider by its own
//! identifier (`bitcoin`). Both are newtypes so the two never get mixed up.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Tickers every chat starts with after `/start`.
pub const DEFAULT_COINS: [&str; 4] = ["SOL", "ETH", "BTC", "BNB"];

/// Current fiat price per coin name, as returned by a batched lookup.
pub type PriceTable = HashMap<CoinName, f64>;

/// User-facing ticker in canonical (trimmed, uppercase) form.
///
/// The inner String is private so every value goes through [`CoinName::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CoinName(String);

impl CoinName {
    /// Normalize raw user input into a coin name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCoinName`] if nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCoinName);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Get the coin name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CoinName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CoinName> for String {
    fn from(name: CoinName) -> Self {
        name.0
    }
}

/// The default watchlist as coin names.
#[must_use]
pub fn default_coins() -> Vec<CoinName> {
    DEFAULT_COINS
        .iter()
        .map(|raw| CoinName(raw.to_string()))
        .collect()
}

/// Identifier assigned to a coin by the price provider (e.g. `bitcoin`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinId(String);

impl CoinId {
    /// Create a new `CoinId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the coin ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One entry of the provider's coin catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CoinId::new(id),
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}
