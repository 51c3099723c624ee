//! Chat identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label used when the transport does not know the user's handle.
pub const UNKNOWN_USERNAME: &str = "Unknown";

/// Opaque identifier of a chat on the messaging transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A chat together with its best-effort display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscriber {
    pub chat_id: ChatId,
    pub username: String,
}

impl Subscriber {
    /// Build a subscriber, falling back to [`UNKNOWN_USERNAME`] for a missing
    /// or blank username.
    pub fn new(chat_id: ChatId, username: Option<&str>) -> Self {
        let username = username
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_USERNAME)
            .to_string();
        Self { chat_id, username }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_username_defaults_to_unknown() {
        let subscriber = Subscriber::new(ChatId(7), None);
        assert_eq!(subscriber.username, "Unknown");

        let subscriber = Subscriber::new(ChatId(7), Some("  "));
        assert_eq!(subscriber.username, "Unknown");
    }

    #[test]
    fn username_is_kept_as_given() {
        let subscriber = Subscriber::new(ChatId(7), Some("satoshi"));
        assert_eq!(subscriber.username, "satoshi");
        assert_eq!(subscriber.chat_id, ChatId(7));
    }
}
