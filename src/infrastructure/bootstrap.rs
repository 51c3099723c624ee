//! Composition root: builds adapters and services from [`Config`].

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::coingecko::CoinGeckoClient;
use crate::adapter::outbound::sqlite::{create_pool, run_migrations, SqliteSubscriptionStore};
use crate::application::{BotService, Broadcaster, CatalogResolver, PriceService};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{MessageSender, SubscriptionStore};

/// Open (creating if needed) and migrate the subscription database.
///
/// # Errors
/// Returns an error if the pool cannot be created or migrations fail.
pub fn open_store(config: &Config) -> Result<Arc<SqliteSubscriptionStore>> {
    let pool = create_pool(&config.database)?;
    run_migrations(&pool)?;
    info!(database = %config.database, "Subscription database ready");
    Ok(Arc::new(SqliteSubscriptionStore::new(pool)))
}

/// Price service backed by one CoinGecko client for both catalog and quotes.
#[must_use]
pub fn build_price_service(config: &Config) -> Arc<PriceService> {
    let client = Arc::new(CoinGeckoClient::from_config(&config.coingecko));
    let resolver = CatalogResolver::new(client.clone());
    Arc::new(PriceService::new(
        client,
        resolver,
        config.coingecko.currency.as_str(),
    ))
}

/// Command handler for the chat transport.
#[must_use]
pub fn build_bot_service(
    store: Arc<dyn SubscriptionStore>,
    prices: Arc<PriceService>,
) -> Arc<BotService> {
    Arc::new(BotService::new(store, prices))
}

/// Broadcaster using the configured send timeout.
#[must_use]
pub fn build_broadcaster(
    config: &Config,
    store: Arc<dyn SubscriptionStore>,
    prices: Arc<PriceService>,
    sender: Arc<dyn MessageSender>,
) -> Arc<Broadcaster> {
    Arc::new(Broadcaster::new(
        store,
        prices,
        sender,
        config.broadcast.send_timeout(),
    ))
}

#[cfg(feature = "telegram")]
mod telegram {
    use std::sync::Arc;

    use teloxide::Bot;
    use tracing::info;

    use super::{build_bot_service, build_broadcaster, build_price_service, open_store};
    use crate::adapter::inbound::telegram::run_listener;
    use crate::adapter::outbound::telegram::TelegramSender;
    use crate::application::{run_daily, BroadcastSummary};
    use crate::error::Result;
    use crate::infrastructure::config::settings::Config;
    use crate::port::SubscriptionStore;

    /// Run the bot and, if enabled, the daily broadcaster until Ctrl-C.
    ///
    /// # Errors
    /// Returns an error if the token is missing, the schedule is invalid or
    /// the database cannot be opened.
    pub async fn run(config: &Config) -> Result<()> {
        let bot = Bot::new(config.require_telegram_token()?);
        let store: Arc<dyn SubscriptionStore> = open_store(config)?;
        let prices = build_price_service(config);

        let daily = if config.broadcast.enabled {
            let schedule = config.broadcast.schedule()?;
            let sender = Arc::new(TelegramSender::new(bot.clone()));
            let broadcaster = build_broadcaster(config, store.clone(), prices.clone(), sender);
            info!(time_utc = %config.broadcast.time_utc, "Daily broadcast enabled");
            Some(tokio::spawn(run_daily(broadcaster, schedule)))
        } else {
            info!("Daily broadcast disabled");
            None
        };

        let handler = build_bot_service(store, prices);
        run_listener(bot, handler).await;

        if let Some(task) = daily {
            task.abort();
        }
        Ok(())
    }

    /// Run a single broadcast cycle now.
    ///
    /// # Errors
    /// Returns an error if the token is missing or the database cannot be
    /// opened.
    pub async fn broadcast_once(config: &Config) -> Result<BroadcastSummary> {
        let bot = Bot::new(config.require_telegram_token()?);
        let store: Arc<dyn SubscriptionStore> = open_store(config)?;
        let prices = build_price_service(config);
        let sender = Arc::new(TelegramSender::new(bot));

        let broadcaster = build_broadcaster(config, store, prices, sender);
        Ok(broadcaster.run_cycle().await)
    }
}

#[cfg(feature = "telegram")]
pub use telegram::{broadcast_once, run};
