//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the Telegram bot token is only
//! ever read from the `TELEGRAM_BOT_TOKEN` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use coincourier::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::broadcast::BroadcastConfig;
use super::logging::LoggingConfig;
use crate::adapter::outbound::coingecko::CoinGeckoConfig;
use crate::error::{ConfigError, Result};

/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Main application configuration.
///
/// Every section is optional; an empty file yields a working configuration
/// against the public CoinGecko API.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Path to SQLite database file.
    ///
    /// Defaults to "coincourier.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Price provider settings.
    #[serde(default)]
    pub coingecko: CoinGeckoConfig,

    /// Daily report settings.
    #[serde(default)]
    pub broadcast: BroadcastConfig,

    /// Bot token, filled from the environment after parsing.
    #[serde(skip)]
    pub telegram_token: Option<String>,
}

fn default_database_path() -> String {
    "coincourier.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            logging: LoggingConfig::default(),
            coingecko: CoinGeckoConfig::default(),
            broadcast: BroadcastConfig::default(),
            telegram_token: None,
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the bot token from the `TELEGRAM_BOT_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Never from the config file
        config.telegram_token = std::env::var(TELEGRAM_TOKEN_ENV)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }

        let coingecko = &self.coingecko;
        if coingecko.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        url::Url::parse(&coingecko.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "api_url",
            reason: e.to_string(),
        })?;
        if coingecko.currency.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "currency" }.into());
        }
        if coingecko.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if coingecko.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if coingecko.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        self.broadcast.schedule()?;
        if self.broadcast.send_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "send_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// The bot token, required by every command that talks to Telegram.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `TELEGRAM_BOT_TOKEN` is unset.
    #[allow(clippy::result_large_err)]
    pub fn require_telegram_token(&self) -> Result<&str> {
        self.telegram_token.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: TELEGRAM_TOKEN_ENV,
            }
            .into()
        })
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
