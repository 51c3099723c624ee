//! SQLite subscription store implementation.
//!
//! Provides persistent per-chat watchlists using SQLite and Diesel ORM.

use std::collections::BTreeMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    CoinRow, NewCoinRow, NewSubscriptionRow, SubscriptionRow,
};
use crate::adapter::outbound::sqlite::database::schema::{coins, subscriptions};
use crate::domain::{ChatId, CoinName, Subscriber};
use crate::error::{Error, Result};
use crate::port::SubscriptionStore;

type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite-backed subscription store.
///
/// Implements the [`SubscriptionStore`] trait over the `coins` and
/// `subscriptions` tables.
pub struct SqliteSubscriptionStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteSubscriptionStore {
    /// Create a new SQLite subscription store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<Conn> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    /// Every coin ever registered, in registration order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn known_coins(&self) -> Result<Vec<CoinName>> {
        let mut conn = self.conn()?;
        let rows: Vec<CoinRow> = coins::table
            .select(CoinRow::as_select())
            .order(coins::coin_id.asc())
            .load(&mut conn)?;
        to_coin_names(rows)
    }
}

fn to_coin_names(rows: Vec<CoinRow>) -> Result<Vec<CoinName>> {
    rows.iter()
        .map(|row| CoinName::parse(&row.coin_name).map_err(Error::from))
        .collect()
}

#[async_trait]
impl SubscriptionStore for SqliteSubscriptionStore {
    async fn list_coins(&self, chat_id: ChatId) -> Result<Vec<CoinName>> {
        let mut conn = self.conn()?;

        let rows: Vec<CoinRow> = subscriptions::table
            .inner_join(coins::table)
            .filter(subscriptions::chat_id.eq(chat_id.0))
            .order(subscriptions::id.asc())
            .select(CoinRow::as_select())
            .load(&mut conn)?;

        to_coin_names(rows)
    }

    async fn add_coin(&self, subscriber: &Subscriber, coin: &CoinName) -> Result<bool> {
        let mut conn = self.conn()?;
        let coin_name = coin.as_str();

        let created = conn.immediate_transaction::<_, DieselError, _>(|conn| {
            diesel::insert_or_ignore_into(coins::table)
                .values(&NewCoinRow { coin_name })
                .execute(conn)?;

            let coin_id: i32 = coins::table
                .filter(coins::coin_name.eq(coin_name))
                .select(coins::coin_id)
                .first(conn)?;

            let row = NewSubscriptionRow {
                chat_id: subscriber.chat_id.0,
                username: Some(subscriber.username.as_str()),
                coin_id,
            };
            match diesel::insert_into(subscriptions::table)
                .values(&row)
                .execute(conn)
            {
                Ok(_) => Ok(true),
                Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                    Ok(false)
                }
                Err(e) => Err(e),
            }
        })?;

        debug!(chat_id = %subscriber.chat_id, coin = %coin, created, "add_coin");
        Ok(created)
    }

    async fn remove_coin(&self, chat_id: ChatId, coin: &CoinName) -> Result<bool> {
        let mut conn = self.conn()?;

        let coin_ids = coins::table
            .filter(coins::coin_name.eq(coin.as_str()))
            .select(coins::coin_id);
        let deleted = diesel::delete(
            subscriptions::table
                .filter(subscriptions::chat_id.eq(chat_id.0))
                .filter(subscriptions::coin_id.eq_any(coin_ids)),
        )
        .execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn list_all_chats(&self) -> Result<Vec<Subscriber>> {
        let mut conn = self.conn()?;

        let rows: Vec<SubscriptionRow> = subscriptions::table
            .select(SubscriptionRow::as_select())
            .order(subscriptions::id.asc())
            .load(&mut conn)?;

        // Later rows overwrite earlier ones: the newest username wins.
        let mut chats: BTreeMap<i64, Option<String>> = BTreeMap::new();
        for row in rows {
            chats.insert(row.chat_id, row.username);
        }

        Ok(chats
            .into_iter()
            .map(|(chat_id, username)| Subscriber::new(ChatId(chat_id), username.as_deref()))
            .collect())
    }
}
