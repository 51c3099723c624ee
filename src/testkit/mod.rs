//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`catalog`] - [`ScriptedCatalog`](catalog::ScriptedCatalog), a fixed or failing coin catalog.
//! - [`price`] - [`ScriptedPriceSource`](price::ScriptedPriceSource) with canned quotes and request capture.
//! - [`store`] - [`MemoryStore`](store::MemoryStore), an in-memory subscription store.
//! - [`sender`] - [`RecordingSender`](sender::RecordingSender) that records, fails or delays deliveries.

pub mod catalog;
pub mod price;
pub mod sender;
pub mod store;
