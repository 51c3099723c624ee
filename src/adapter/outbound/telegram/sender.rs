//! Telegram message delivery.

use async_trait::async_trait;
use teloxide::prelude::{Bot, Requester};
use teloxide::types::ChatId as TelegramChatId;
use tracing::debug;

use crate::domain::ChatId;
use crate::error::{Error, Result};
use crate::port::MessageSender;

/// Sends plain-text messages through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramSender {
    bot: Bot,
}

impl TelegramSender {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send(&self, chat_id: ChatId, text: &str) -> Result<()> {
        self.bot
            .send_message(TelegramChatId(chat_id.0), text)
            .await
            .map_err(|e| Error::Delivery {
                chat_id: chat_id.0,
                reason: e.to_string(),
            })?;
        debug!(chat_id = chat_id.0, "Message delivered");
        Ok(())
    }
}
