use std::fmt;

use serde::Deserialize;

/// Stable identifier of a chat in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ChatId(String);

impl ChatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChatId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: ChatId,
    pub name: String,
    /// Preview of the last message shown under the chat name.
    pub last: String,
    /// Cosmetic unread badge. Selecting a chat never changes it.
    pub unread: Option<u32>,
}

impl Chat {
    pub fn new(id: impl Into<String>, name: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            id: ChatId::new(id),
            name: name.into(),
            last: last.into(),
            unread: None,
        }
    }

    pub fn with_unread(mut self, unread: u32) -> Self {
        self.unread = Some(unread);
        self
    }

    /// Returns the badge count worth rendering, if any.
    pub fn unread_badge(&self) -> Option<u32> {
        self.unread.filter(|count| *count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_badge_hides_zero_count() {
        let chat = Chat::new("c1", "Security Team", "Key rotation complete.").with_unread(0);

        assert_eq!(chat.unread_badge(), None);
    }

    #[test]
    fn unread_badge_returns_positive_count() {
        let chat = Chat::new("c1", "Security Team", "Key rotation complete.").with_unread(2);

        assert_eq!(chat.unread_badge(), Some(2));
    }

    #[test]
    fn chat_id_displays_raw_value() {
        assert_eq!(ChatId::from("c42").to_string(), "c42");
    }
}
