//! Outbound adapters (driven side).

pub mod coingecko;
pub mod sqlite;
#[cfg(feature = "telegram")]
pub mod telegram;
