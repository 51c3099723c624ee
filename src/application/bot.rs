//! Bot command execution.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::price::PriceService;
use super::report::{format_report, report_entries, COURSE_HEADER};
use crate::domain::{CoinName, Subscriber};
use crate::port::{Command, CommandHandler, CommandRequest, SubscriptionStore};

pub const WELCOME_TEXT: &str = "Welcome! You've been added default coins. Use /help for commands.";

pub const HELP_TEXT: &str = "Commands:\n\
/course - Get current prices of your coins\n\
/add <coin_name> - Add a coin using coin's tag (like USDT, SOL etc.) (e.g., /add USDT)\n\
/list - List your coins\n\
/delete <coin_name> - Remove a coin (e.g., /delete USDT)\n\
/help - Show this help";

pub const NO_COINS_TEXT: &str = "No coins in your list.";

const STORE_FAILURE_TEXT: &str = "Something went wrong with your list. Please try again later.";

/// Executes bot commands against the subscription store and price service.
#[derive(Clone)]
pub struct BotService {
    store: Arc<dyn SubscriptionStore>,
    prices: Arc<PriceService>,
}

impl BotService {
    pub fn new(store: Arc<dyn SubscriptionStore>, prices: Arc<PriceService>) -> Self {
        Self { store, prices }
    }

    async fn start(&self, subscriber: &Subscriber) -> String {
        match self.store.initialize_defaults(subscriber).await {
            Ok(added) => {
                info!(chat_id = %subscriber.chat_id, added, "Initialized default coins");
                WELCOME_TEXT.to_string()
            }
            Err(e) => {
                error!(chat_id = %subscriber.chat_id, error = %e, "Failed to initialize default coins");
                STORE_FAILURE_TEXT.to_string()
            }
        }
    }

    async fn course(&self, subscriber: &Subscriber) -> String {
        let coins = match self.store.list_coins(subscriber.chat_id).await {
            Ok(coins) => coins,
            Err(e) => {
                error!(chat_id = %subscriber.chat_id, error = %e, "Failed to list coins");
                return STORE_FAILURE_TEXT.to_string();
            }
        };
        if coins.is_empty() {
            return NO_COINS_TEXT.to_string();
        }

        let prices = self.prices.get_prices(&coins).await;
        format_report(COURSE_HEADER, &report_entries(&coins, &prices))
    }

    async fn add(&self, subscriber: &Subscriber, coin: &CoinName) -> String {
        match self.store.add_coin(subscriber, coin).await {
            Ok(true) => {
                info!(chat_id = %subscriber.chat_id, coin = %coin, "Coin added");
                format!("Added {coin} to your list.")
            }
            Ok(false) => format!("{coin} is already in your list."),
            Err(e) => {
                error!(chat_id = %subscriber.chat_id, coin = %coin, error = %e, "Failed to add coin");
                STORE_FAILURE_TEXT.to_string()
            }
        }
    }

    async fn list(&self, subscriber: &Subscriber) -> String {
        match self.store.list_coins(subscriber.chat_id).await {
            Ok(coins) if coins.is_empty() => NO_COINS_TEXT.to_string(),
            Ok(coins) => {
                let names: Vec<&str> = coins.iter().map(CoinName::as_str).collect();
                format!("Your coins:\n{}", names.join("\n"))
            }
            Err(e) => {
                error!(chat_id = %subscriber.chat_id, error = %e, "Failed to list coins");
                STORE_FAILURE_TEXT.to_string()
            }
        }
    }

    async fn delete(&self, subscriber: &Subscriber, coin: &CoinName) -> String {
        match self.store.remove_coin(subscriber.chat_id, coin).await {
            Ok(true) => {
                info!(chat_id = %subscriber.chat_id, coin = %coin, "Coin removed");
                format!("Removed {coin} from your list.")
            }
            Ok(false) => format!("{coin} not found in your list."),
            Err(e) => {
                error!(chat_id = %subscriber.chat_id, coin = %coin, error = %e, "Failed to remove coin");
                STORE_FAILURE_TEXT.to_string()
            }
        }
    }
}

#[async_trait]
impl CommandHandler for BotService {
    async fn handle(&self, request: CommandRequest) -> String {
        let subscriber = &request.subscriber;
        match &request.command {
            Command::Start => self.start(subscriber).await,
            Command::Help => HELP_TEXT.to_string(),
            Command::Course => self.course(subscriber).await,
            Command::Add(coin) => self.add(subscriber, coin).await,
            Command::List => self.list(subscriber).await,
            Command::Delete(coin) => self.delete(subscriber, coin).await,
        }
    }
}
