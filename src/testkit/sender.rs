//! Recording message sender.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::ChatId;
use crate::error::{Error, Result};
use crate::port::MessageSender;

/// Sender that records delivered messages.
///
/// Chats can be scripted to reject delivery or to respond slowly.
#[derive(Debug, Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<(ChatId, String)>>,
    rejecting: HashSet<ChatId>,
    delays: HashMap<ChatId, Duration>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every delivery to `chat_id`.
    #[must_use]
    pub fn failing_for(mut self, chat_id: ChatId) -> Self {
        self.rejecting.insert(chat_id);
        self
    }

    /// Wait `delay` before completing deliveries to `chat_id`.
    #[must_use]
    pub fn delayed_for(mut self, chat_id: ChatId, delay: Duration) -> Self {
        self.delays.insert(chat_id, delay);
        self
    }

    /// Messages delivered so far, in order.
    pub fn sent(&self) -> Vec<(ChatId, String)> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send(&self, chat_id: ChatId, text: &str) -> Result<()> {
        if let Some(delay) = self.delays.get(&chat_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.rejecting.contains(&chat_id) {
            return Err(Error::Delivery {
                chat_id: chat_id.0,
                reason: "Forbidden: bot was blocked by the user".to_string(),
            });
        }
        self.sent.lock().push((chat_id, text.to_string()));
        Ok(())
    }
}
