use std::path::PathBuf;
use std::sync::Arc;

use coincourier::adapter::outbound::sqlite::{
    create_pool, run_migrations, DbPool, SqliteSubscriptionStore,
};
use tempfile::TempDir;

/// Temporary on-disk SQLite database for integration tests.
///
/// The directory and database file are removed on drop.
pub struct TempDb {
    dir: TempDir,
    pool: DbPool,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let pool = create_pool(&url_in(&dir)).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");
        Self { dir, pool }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join(FILE_NAME)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// A store sharing this database's pool.
    pub fn store(&self) -> Arc<SqliteSubscriptionStore> {
        Arc::new(SqliteSubscriptionStore::new(self.pool.clone()))
    }

    /// A store over a brand-new pool, as a restarted process would open it.
    pub fn reopen(&self) -> Arc<SqliteSubscriptionStore> {
        let pool = create_pool(&url_in(&self.dir)).expect("reopen sqlite pool");
        run_migrations(&pool).expect("re-run migrations");
        Arc::new(SqliteSubscriptionStore::new(pool))
    }
}

const FILE_NAME: &str = "subscriptions.db";

fn url_in(dir: &TempDir) -> String {
    dir.path().join(FILE_NAME).to_string_lossy().to_string()
}
