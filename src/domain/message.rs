use std::fmt;

use serde::Deserialize;

/// Identifier of a message. Unique only within its parent chat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Origin of a message relative to the local user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    #[serde(alias = "self")]
    Me,
    #[serde(alias = "other")]
    Them,
}

impl MessageOrigin {
    pub fn is_outgoing(self) -> bool {
        self == MessageOrigin::Me
    }

    /// Returns a short sender label for plain-text output.
    pub fn display_label(self) -> &'static str {
        match self {
            MessageOrigin::Me => "you",
            MessageOrigin::Them => "them",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub from: MessageOrigin,
    pub text: String,
    /// Display-formatted time. Ordering comes from position in the chat, not from this value.
    pub time: String,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        from: MessageOrigin,
        text: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: MessageId::new(id),
            from,
            text: text.into(),
            time: time.into(),
        }
    }
}
