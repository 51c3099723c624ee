//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and per-connection
//! pragmas for SQLite databases.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// In-memory databases are private to one connection.
const MEMORY_URL: &str = ":memory:";

const MAX_POOL_SIZE: u32 = 5;

/// Sets busy timeout and foreign key enforcement on every pooled connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), diesel::r2d2::Error> {
        apply_pragmas(conn).map_err(diesel::r2d2::Error::QueryError)
    }
}

fn apply_pragmas(conn: &mut SqliteConnection) -> QueryResult<()> {
    diesel::sql_query("PRAGMA busy_timeout=5000").execute(conn)?;
    diesel::sql_query("PRAGMA foreign_keys=ON").execute(conn)?;
    Ok(())
}

/// Create a connection pool for the given database URL.
///
/// `:memory:` gets a single connection that is never reaped, so every caller
/// sees the same database for the life of the pool.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let builder = Pool::builder().connection_customizer(Box::new(SqlitePragmas));
    let builder = if database_url == MEMORY_URL {
        // A replacement connection would open a fresh, empty database.
        builder.max_size(1).max_lifetime(None).idle_timeout(None)
    } else {
        builder.max_size(MAX_POOL_SIZE)
    };
    builder
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Connection(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(diesel::QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[derive(diesel::QueryableByName)]
    struct PragmaValue {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        foreign_keys: i32,
    }

    fn table_names(pool: &DbPool) -> Vec<String> {
        let mut conn = pool.get().unwrap();
        diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name",
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect()
    }

    #[test]
    fn create_pool_with_memory_db() {
        let pool = create_pool(":memory:").unwrap();
        assert_eq!(pool.max_size(), 1);
        assert!(pool.get().is_ok());
    }

    #[test]
    fn memory_pool_never_reaps_its_connection() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();

        assert_eq!(pool.max_lifetime(), None);
        assert_eq!(pool.idle_timeout(), None);
        assert_eq!(table_names(&pool), vec!["coins", "subscriptions"]);
    }

    #[test]
    fn file_pool_keeps_default_reaping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reaped.db");
        let pool = create_pool(path.to_str().unwrap()).unwrap();

        assert!(pool.max_lifetime().is_some());
        assert!(pool.idle_timeout().is_some());
    }

    #[test]
    fn run_migrations_creates_tables() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();

        assert_eq!(table_names(&pool), vec!["coins", "subscriptions"]);
    }

    #[test]
    fn run_migrations_is_idempotent() {
        let pool = create_pool(":memory:").unwrap();

        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();

        assert_eq!(table_names(&pool), vec!["coins", "subscriptions"]);
    }

    #[test]
    fn pooled_connections_enforce_foreign_keys() {
        let pool = create_pool(":memory:").unwrap();
        let mut conn = pool.get().unwrap();

        let pragma = diesel::sql_query("PRAGMA foreign_keys")
            .get_result::<PragmaValue>(&mut conn)
            .unwrap();

        assert_eq!(pragma.foreign_keys, 1);
    }

    #[test]
    fn file_pool_shares_one_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.db");
        let pool = create_pool(path.to_str().unwrap()).unwrap();
        run_migrations(&pool).unwrap();

        assert_eq!(pool.max_size(), MAX_POOL_SIZE);
        let first = pool.get().unwrap();
        drop(first);
        assert_eq!(table_names(&pool), vec!["coins", "subscriptions"]);
    }
}
