//! Daily trigger for the broadcast cycle.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use tracing::info;

use super::broadcast::Broadcaster;

/// Fires once a day at a fixed UTC time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    at: NaiveTime,
}

impl DailySchedule {
    #[must_use]
    pub const fn new(at: NaiveTime) -> Self {
        Self { at }
    }

    /// Parse an `HH:MM` time of day.
    ///
    /// # Errors
    ///
    /// Returns the chrono parse error for anything else.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M").map(Self::new)
    }

    #[must_use]
    pub const fn time_of_day(&self) -> NaiveTime {
        self.at
    }

    /// First firing time strictly after `now`.
    #[must_use]
    pub fn next_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = Utc.from_utc_datetime(&now.date_naive().and_time(self.at));
        if today > now {
            today
        } else {
            today + Duration::days(1)
        }
    }
}

/// Run `broadcaster` on `schedule` forever.
///
/// Cycle failures are absorbed by the broadcaster, so this only returns
/// when the surrounding task is cancelled.
pub async fn run_daily(broadcaster: Arc<Broadcaster>, schedule: DailySchedule) {
    loop {
        let now = Utc::now();
        let next = schedule.next_after(now);
        let wait = (next - now).to_std().unwrap_or_default();
        info!(next_run = %next, wait_secs = wait.as_secs(), "Next broadcast scheduled");

        tokio::time::sleep(wait).await;
        broadcaster.run_cycle().await;
    }
}
