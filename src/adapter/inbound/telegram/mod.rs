//! Telegram inbound adapter: command parsing and the update listener.

pub mod command;
#[cfg(feature = "telegram")]
pub mod listener;

pub use command::{command_response_for_message, parse_command, CommandParseError};
#[cfg(feature = "telegram")]
pub use listener::run_listener;
