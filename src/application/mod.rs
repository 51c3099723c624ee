//! Subscription and price-resolution engine.
//!
//! Depends only on domain types and ports; adapters are injected.

pub mod bot;
pub mod broadcast;
pub mod price;
pub mod report;
pub mod resolver;
pub mod schedule;

pub use bot::BotService;
pub use broadcast::{BroadcastSummary, Broadcaster};
pub use price::PriceService;
pub use resolver::CatalogResolver;
pub use schedule::{run_daily, DailySchedule};
