//! Domain validation errors.
//!
//! Returned by constructors that enforce invariants on user-supplied input.
//!
//! ```
//! use coincourier::domain::coin::CoinName;
//! use coincourier::domain::error::DomainError;
//!
//! assert!(matches!(CoinName::parse("   "), Err(DomainError::EmptyCoinName)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A coin name was empty after trimming.
    #[error("coin name must not be empty")]
    EmptyCoinName,
}
