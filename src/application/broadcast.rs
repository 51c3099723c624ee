//! Scheduled price broadcast to every subscriber.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use super::price::PriceService;
use super::report::{format_report, greeting_header, report_entries};
use crate::domain::Subscriber;
use crate::port::{MessageSender, SubscriptionStore};

/// Outcome counters of one broadcast cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastSummary {
    /// Chats returned by the store.
    pub recipients: usize,
    /// Reports accepted by the transport.
    pub delivered: usize,
    /// Chats whose report could not be built or delivered.
    pub failed: usize,
    /// Chats that had no coins left by the time they were processed.
    pub skipped: usize,
}

/// Sends every subscribed chat its current price report.
pub struct Broadcaster {
    store: Arc<dyn SubscriptionStore>,
    prices: Arc<PriceService>,
    sender: Arc<dyn MessageSender>,
    send_timeout: Duration,
}

impl Broadcaster {
    pub fn new(
        store: Arc<dyn SubscriptionStore>,
        prices: Arc<PriceService>,
        sender: Arc<dyn MessageSender>,
        send_timeout: Duration,
    ) -> Self {
        Self {
            store,
            prices,
            sender,
            send_timeout,
        }
    }

    /// Run one cycle over all chats, sequentially.
    ///
    /// A failure for one chat is logged and counted; the cycle always moves
    /// on to the next chat.
    pub async fn run_cycle(&self) -> BroadcastSummary {
        let mut summary = BroadcastSummary::default();

        let subscribers = match self.store.list_all_chats().await {
            Ok(subscribers) => subscribers,
            Err(e) => {
                error!(error = %e, "Failed to list subscribers, skipping broadcast");
                return summary;
            }
        };
        summary.recipients = subscribers.len();
        info!(recipients = summary.recipients, "Broadcast cycle started");

        for subscriber in &subscribers {
            match self.deliver(subscriber).await {
                Delivery::Sent => summary.delivered += 1,
                Delivery::Empty => summary.skipped += 1,
                Delivery::Failed => summary.failed += 1,
            }
        }

        info!(
            recipients = summary.recipients,
            delivered = summary.delivered,
            failed = summary.failed,
            skipped = summary.skipped,
            "Broadcast cycle finished"
        );
        summary
    }

    async fn deliver(&self, subscriber: &Subscriber) -> Delivery {
        let chat_id = subscriber.chat_id;

        let coins = match self.store.list_coins(chat_id).await {
            Ok(coins) => coins,
            Err(e) => {
                error!(chat_id = %chat_id, error = %e, "Failed to load coins for broadcast");
                return Delivery::Failed;
            }
        };
        if coins.is_empty() {
            debug!(chat_id = %chat_id, "No coins left, skipping");
            return Delivery::Empty;
        }

        let prices = self.prices.get_prices(&coins).await;
        let text = format_report(
            &greeting_header(&subscriber.username),
            &report_entries(&coins, &prices),
        );

        match tokio::time::timeout(self.send_timeout, self.sender.send(chat_id, &text)).await {
            Ok(Ok(())) => Delivery::Sent,
            Ok(Err(e)) => {
                error!(chat_id = %chat_id, error = %e, "Failed to send broadcast");
                Delivery::Failed
            }
            Err(_) => {
                error!(
                    chat_id = %chat_id,
                    timeout_ms = self.send_timeout.as_millis() as u64,
                    "Broadcast send timed out"
                );
                Delivery::Failed
            }
        }
    }
}

enum Delivery {
    Sent,
    Empty,
    Failed,
}
