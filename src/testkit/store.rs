//! In-memory subscription store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{default_coins, ChatId, CoinName, Subscriber};
use crate::error::{Error, Result};
use crate::port::SubscriptionStore;

#[derive(Debug)]
struct SubscriptionRow {
    chat_id: ChatId,
    username: String,
    coin: CoinName,
}

#[derive(Debug, Default)]
struct MemoryState {
    coins: Vec<CoinName>,
    subscriptions: Vec<SubscriptionRow>,
}

/// In-memory store with the same semantics as the SQLite store.
///
/// The coin catalog starts with the default coins and never shrinks.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
    failing: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                coins: default_coins(),
                subscriptions: Vec::new(),
            }),
            failing: AtomicBool::new(false),
        }
    }
}

impl MemoryStore {
    /// Create a new store seeded with the default coins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Every coin ever registered, in registration order.
    pub fn known_coins(&self) -> Vec<CoinName> {
        self.state.read().coins.clone()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Database("scripted store failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SubscriptionStore for MemoryStore {
    async fn list_coins(&self, chat_id: ChatId) -> Result<Vec<CoinName>> {
        self.check()?;
        Ok(self
            .state
            .read()
            .subscriptions
            .iter()
            .filter(|row| row.chat_id == chat_id)
            .map(|row| row.coin.clone())
            .collect())
    }

    async fn add_coin(&self, subscriber: &Subscriber, coin: &CoinName) -> Result<bool> {
        self.check()?;
        let mut state = self.state.write();
        if !state.coins.contains(coin) {
            state.coins.push(coin.clone());
        }
        let exists = state
            .subscriptions
            .iter()
            .any(|row| row.chat_id == subscriber.chat_id && &row.coin == coin);
        if exists {
            return Ok(false);
        }
        state.subscriptions.push(SubscriptionRow {
            chat_id: subscriber.chat_id,
            username: subscriber.username.clone(),
            coin: coin.clone(),
        });
        Ok(true)
    }

    async fn remove_coin(&self, chat_id: ChatId, coin: &CoinName) -> Result<bool> {
        self.check()?;
        let mut state = self.state.write();
        let before = state.subscriptions.len();
        state
            .subscriptions
            .retain(|row| !(row.chat_id == chat_id && &row.coin == coin));
        Ok(state.subscriptions.len() < before)
    }

    async fn list_all_chats(&self) -> Result<Vec<Subscriber>> {
        self.check()?;
        let state = self.state.read();
        let mut latest: BTreeMap<ChatId, &str> = BTreeMap::new();
        for row in &state.subscriptions {
            latest.insert(row.chat_id, &row.username);
        }
        Ok(latest
            .into_iter()
            .map(|(chat_id, username)| Subscriber {
                chat_id,
                username: username.to_string(),
            })
            .collect())
    }
}
