//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{coins, subscriptions};

/// Database row for a known coin.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = coins)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CoinRow {
    pub coin_id: i32,
    pub coin_name: String,
}

/// Database row for a coin (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = coins)]
pub struct NewCoinRow<'a> {
    pub coin_name: &'a str,
}

/// Database row for a subscription (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = subscriptions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubscriptionRow {
    pub id: i32,
    pub chat_id: i64,
    pub username: Option<String>,
    pub coin_id: i32,
}

/// Database row for a subscription (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = subscriptions)]
pub struct NewSubscriptionRow<'a> {
    pub chat_id: i64,
    pub username: Option<&'a str>,
    pub coin_id: i32,
}
