//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points of the engine. Adapters implement
//! them to integrate with the price provider, the database and the chat
//! transport.
//!
//! ```text
//!                  ┌───────────────────────┐
//!   Telegram ────► │      Application      │ ────► CoinGecko
//!   (inbound)      │  resolver · prices ·  │       (catalog, prices)
//!                  │  bot · broadcaster    │
//!                  └──────────┬────────────┘
//!                             │
//!                  SQLite store · Telegram sender
//! ```
//!
//! # Available Ports
//!
//! - [`CommandHandler`] - inbound command execution
//! - [`CoinCatalog`], [`PriceSource`] - price provider integration
//! - [`SubscriptionStore`] - persistence of per-chat watchlists
//! - [`MessageSender`] - outbound message delivery

pub mod inbound;
pub mod outbound;

pub use inbound::command::{Command, CommandHandler, CommandRequest};
pub use outbound::catalog::CoinCatalog;
pub use outbound::price::PriceSource;
pub use outbound::sender::MessageSender;
pub use outbound::store::SubscriptionStore;
