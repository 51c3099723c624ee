//! Command-line interface definitions.
//!
//! Defines the CLI structure for the coincourier application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Telegram bot for per-chat cryptocurrency watchlists
#[derive(Parser, Debug)]
#[command(name = "coincourier")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the coincourier CLI.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot and the daily broadcast until Ctrl-C
    Run,
    /// Send the price report to every subscriber once, now
    Broadcast,
    /// Validate the configuration and open the database
    Check,
}
