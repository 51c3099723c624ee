//! Subscription persistence port.

use async_trait::async_trait;

use crate::domain::{default_coins, ChatId, CoinName, Subscriber};
use crate::error::Result;

/// Per-chat coin subscriptions plus the shared coin catalog.
///
/// Every method is one independent atomic operation against the backing
/// store; callers never need to hold locks across calls.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Coins subscribed by `chat_id`, in insertion order.
    async fn list_coins(&self, chat_id: ChatId) -> Result<Vec<CoinName>>;

    /// Subscribe a chat to a coin, registering the coin if it is new.
    ///
    /// Returns `true` if a subscription was created and `false` if it
    /// already existed. A uniqueness conflict is never an error.
    async fn add_coin(&self, subscriber: &Subscriber, coin: &CoinName) -> Result<bool>;

    /// Remove a subscription. Returns whether anything was deleted.
    async fn remove_coin(&self, chat_id: ChatId, coin: &CoinName) -> Result<bool>;

    /// Every chat with at least one subscription, ordered by chat id,
    /// labelled with the most recently recorded username.
    async fn list_all_chats(&self) -> Result<Vec<Subscriber>>;

    /// Subscribe a chat to the default coins. Existing subscriptions are
    /// left untouched. Returns how many subscriptions were created.
    async fn initialize_defaults(&self, subscriber: &Subscriber) -> Result<usize> {
        let mut added = 0;
        for coin in default_coins() {
            if self.add_coin(subscriber, &coin).await? {
                added += 1;
            }
        }
        Ok(added)
    }
}
