//! Handler for the `broadcast` command.

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Run one broadcast cycle and print its summary.
#[cfg(feature = "telegram")]
pub async fn execute(config: &Config) -> Result<()> {
    let summary = crate::infrastructure::bootstrap::broadcast_once(config).await?;
    println!(
        "Broadcast finished: {} recipients, {} delivered, {} failed, {} skipped",
        summary.recipients, summary.delivered, summary.failed, summary.skipped
    );
    Ok(())
}

/// Run one broadcast cycle (built without a chat transport).
#[cfg(not(feature = "telegram"))]
pub async fn execute(_config: &Config) -> Result<()> {
    Err(crate::error::ConfigError::InvalidValue {
        field: "features",
        reason: "rebuild with --features telegram".to_string(),
    }
    .into())
}
