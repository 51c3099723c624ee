//! Daily broadcast configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::DailySchedule;
use crate::error::{ConfigError, Result};

const fn default_true() -> bool {
    true
}

fn default_time_utc() -> String {
    "07:00".to_string()
}

const fn default_send_timeout_ms() -> u64 {
    10_000
}

/// Daily broadcast configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastConfig {
    /// Run the daily broadcast alongside the bot (default: true).
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// UTC time of day as `HH:MM` (default: 07:00).
    #[serde(default = "default_time_utc")]
    pub time_utc: String,
    /// Upper bound for a single message send in milliseconds.
    #[serde(default = "default_send_timeout_ms")]
    pub send_timeout_ms: u64,
}

impl BroadcastConfig {
    /// Parsed firing time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `time_utc` is not `HH:MM`.
    #[allow(clippy::result_large_err)]
    pub fn schedule(&self) -> Result<DailySchedule> {
        DailySchedule::parse(&self.time_utc).map_err(|e| {
            ConfigError::InvalidValue {
                field: "time_utc",
                reason: format!("expected HH:MM ({e})"),
            }
            .into()
        })
    }

    #[must_use]
    pub const fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            time_utc: default_time_utc(),
            send_timeout_ms: default_send_timeout_ms(),
        }
    }
}
