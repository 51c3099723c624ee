//! Handler for the `check` command.

use std::path::Path;

use crate::error::Result;
use crate::infrastructure::bootstrap::open_store;
use crate::infrastructure::config::Config;

/// Validate the loaded configuration and open (migrating) the database.
pub fn execute(config_path: &Path, config: &Config) -> Result<()> {
    println!("Configuration: {} (valid)", config_path.display());
    println!("Price API:     {} ({})", config.coingecko.api_url, config.coingecko.currency);

    if config.broadcast.enabled {
        println!("Broadcast:     daily at {} UTC", config.broadcast.time_utc);
    } else {
        println!("Broadcast:     disabled");
    }

    if config.telegram_token.is_some() {
        println!("Telegram:      token present");
    } else {
        println!("Telegram:      TELEGRAM_BOT_TOKEN is not set");
    }

    let store = open_store(config)?;
    let coins = store.known_coins()?;
    println!("Database:      {} ({} known coins)", config.database, coins.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_opens_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            database: dir.path().join("check.db").to_string_lossy().to_string(),
            ..Config::default()
        };

        execute(Path::new("config.toml"), &config).unwrap();

        assert!(dir.path().join("check.db").exists());
    }
}
