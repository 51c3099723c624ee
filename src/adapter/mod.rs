//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - driving side: chat transport and command line
//! - [`outbound`] - driven side: price provider, database, message delivery

pub mod inbound;
pub mod outbound;
