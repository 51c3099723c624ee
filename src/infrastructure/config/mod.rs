//! Infrastructure configuration modules.

pub mod broadcast;
pub mod logging;
pub mod settings;

pub use settings::Config;
