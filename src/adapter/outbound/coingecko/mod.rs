//! CoinGecko adapter for the coin catalog and price ports.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::CoinGeckoClient;
pub use settings::CoinGeckoConfig;
