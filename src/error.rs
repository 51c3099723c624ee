use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("delivery to chat {chat_id} failed: {reason}")]
    Delivery { chat_id: i64, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages_name_the_field() {
        let err = ConfigError::MissingField { field: "api_url" };
        assert_eq!(err.to_string(), "missing required field: api_url");

        let err = ConfigError::InvalidValue {
            field: "timeout_ms",
            reason: "must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for timeout_ms: must be greater than 0"
        );
    }

    #[test]
    fn config_error_is_transparent_inside_crate_error() {
        let err: Error = ConfigError::MissingField { field: "database" }.into();
        assert_eq!(err.to_string(), "missing required field: database");
    }

    #[test]
    fn delivery_error_includes_chat() {
        let err = Error::Delivery {
            chat_id: 42,
            reason: "bot was blocked by the user".to_string(),
        };
        assert!(err.to_string().contains("42"));
        assert!(err.to_string().contains("blocked"));
    }

    #[test]
    fn read_failures_stay_config_errors() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = ConfigError::ReadFile(io).into();

        assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
        assert!(err.to_string().starts_with("failed to read config file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn diesel_errors_become_database_errors() {
        let err: Error = diesel::result::Error::NotFound.into();
        assert!(matches!(err, Error::Database(_)));
    }
}
