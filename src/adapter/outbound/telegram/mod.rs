//! Telegram outbound adapter.
//!
//! Requires the `telegram` feature to be enabled.

pub mod sender;

pub use sender::TelegramSender;
