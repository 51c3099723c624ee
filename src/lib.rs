//! Coincourier - per-chat cryptocurrency watchlists over Telegram.
//!
//! Chats subscribe to coin tickers, ask for current prices on demand, and
//! receive a daily price report. Prices come from the CoinGecko API and
//! subscriptions are kept in SQLite.
//!
//! # Architecture
//!
//! - [`domain`] - Value types: coin names, catalog entries, chats
//! - [`port`] - Traits at every external seam
//! - [`application`] - Name resolution, price lookup, reports, commands,
//!   broadcast
//! - [`adapter`] - Telegram, CoinGecko and SQLite implementations
//! - [`infrastructure`] - Configuration, logging and wiring
//!
//! # Features
//!
//! - `telegram` (default) - Telegram listener and sender via `teloxide`
//! - `testkit` - In-memory fakes for every outbound port
//!
//! # Example
//!
//! ```no_run
//! use coincourier::domain::CoinName;
//! use coincourier::application::report::{format_report, COURSE_HEADER};
//!
//! let btc = CoinName::parse("btc").unwrap();
//! let text = format_report(COURSE_HEADER, &[(btc, Some(50000.1234))]);
//! assert_eq!(text, "Current prices:\nBTC - $ 50 000,1234");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
