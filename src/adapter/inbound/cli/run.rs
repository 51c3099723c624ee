//! Handler for the `run` command.

use tracing::info;

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute the run command.
#[cfg(feature = "telegram")]
pub async fn execute(config: &Config) -> Result<()> {
    info!("coincourier starting");
    crate::infrastructure::bootstrap::run(config).await?;
    info!("coincourier stopped");
    Ok(())
}

/// Execute the run command (built without a chat transport).
#[cfg(not(feature = "telegram"))]
pub async fn execute(_config: &Config) -> Result<()> {
    info!("Built without the `telegram` feature; nothing to run");
    Err(crate::error::ConfigError::InvalidValue {
        field: "features",
        reason: "rebuild with --features telegram".to_string(),
    }
    .into())
}
