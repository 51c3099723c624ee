//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the infrastructure the engine depends on: the
//! coin catalog, the price endpoint, persistence and message delivery.

pub mod catalog;
pub mod price;
pub mod sender;
pub mod store;
