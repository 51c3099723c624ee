//! Outbound message delivery port.

use async_trait::async_trait;

use crate::domain::ChatId;
use crate::error::Result;

/// Delivers plain-text messages to a chat.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send `text` to `chat_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Delivery`](crate::error::Error::Delivery) when the
    /// transport rejects the message (blocked bot, deactivated account, ...).
    async fn send(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
