//! Inbound ports (driving side): what the transport adapters call into.

pub mod command;
