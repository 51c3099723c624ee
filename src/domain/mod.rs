//! Transport- and storage-agnostic value types.

pub mod chat;
pub mod coin;
pub mod error;

pub use chat::{ChatId, Subscriber, UNKNOWN_USERNAME};
pub use coin::{default_coins, CatalogEntry, CoinId, CoinName, PriceTable, DEFAULT_COINS};
pub use error::DomainError;
