//! Inbound command surface.
//!
//! The transport adapter turns raw chat messages into a [`CommandRequest`]
//! and sends back whatever text the [`CommandHandler`] returns.

use async_trait::async_trait;

use crate::domain::{CoinName, Subscriber};

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register the chat with the default coins.
    Start,
    /// Show the command summary.
    Help,
    /// Report current prices for the chat's coins.
    Course,
    /// Subscribe to a coin.
    Add(CoinName),
    /// List subscribed coins without prices.
    List,
    /// Unsubscribe from a coin.
    Delete(CoinName),
}

/// A command together with the chat that issued it.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    pub subscriber: Subscriber,
    pub command: Command,
}

/// Executes bot commands and produces the reply text.
///
/// Implementations never fail: every problem is turned into a plain-text
/// reply so nothing surfaces to the transport layer.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, request: CommandRequest) -> String;
}
