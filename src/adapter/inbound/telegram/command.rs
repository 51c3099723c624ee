//! Telegram command parsing.

use crate::application::bot::HELP_TEXT;
use crate::domain::{CoinName, Subscriber};
use crate::port::{Command, CommandHandler, CommandRequest};

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    /// A coin command arrived without a coin; carries the command name.
    MissingArgument(&'static str),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::MissingArgument(cmd) => write!(f, "missing coin name for `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

impl CommandParseError {
    /// Reply sent back for a rejected message, if any.
    ///
    /// Plain chatter gets no reply.
    #[must_use]
    pub fn reply(&self) -> Option<String> {
        match self {
            Self::NotACommand => None,
            Self::UnknownCommand(cmd) => Some(format!("Unknown command {cmd}.\n\n{HELP_TEXT}")),
            Self::MissingArgument(cmd) => Some(usage(cmd)),
        }
    }
}

/// Usage line for a coin command.
#[must_use]
pub fn usage(command: &str) -> String {
    format!("Usage: {command} <coin_name> (e.g., {command} USDT)")
}

/// Parse a Telegram message into a bot command.
///
/// A `@botname` suffix on the command is ignored. Arguments are joined with
/// single spaces, so `/add  shiba   inu` adds `SHIBA INU`.
pub fn parse_command(text: &str) -> Result<Command, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head)
        .to_lowercase();
    let argument = parts.collect::<Vec<_>>().join(" ");

    match command.as_str() {
        "/start" => Ok(Command::Start),
        "/help" => Ok(Command::Help),
        "/course" => Ok(Command::Course),
        "/list" => Ok(Command::List),
        "/add" => coin_argument(&argument, "/add").map(Command::Add),
        "/delete" => coin_argument(&argument, "/delete").map(Command::Delete),
        _ => Err(CommandParseError::UnknownCommand(command)),
    }
}

fn coin_argument(argument: &str, command: &'static str) -> Result<CoinName, CommandParseError> {
    CoinName::parse(argument).map_err(|_| CommandParseError::MissingArgument(command))
}

/// Produce the reply for one incoming text message.
///
/// Returns `None` when the message should be ignored.
pub async fn command_response_for_message(
    handler: &dyn CommandHandler,
    subscriber: Subscriber,
    text: &str,
) -> Option<String> {
    match parse_command(text) {
        Ok(command) => Some(handler.handle(CommandRequest { subscriber, command }).await),
        Err(err) => err.reply(),
    }
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("course", "Current prices of your coins"),
        ("add", "Add a coin by its tag"),
        ("list", "List your coins"),
        ("delete", "Remove a coin"),
        ("help", "Show all commands"),
    ]
}
