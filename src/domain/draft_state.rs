//! Per-chat drafts and the send guard.
//!
//! Every chat owns its own composer buffer, so switching the active chat never
//! carries unsent text across conversations.

use std::collections::HashMap;

use super::{chat::ChatId, message_input_state::MessageInputState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    /// No draft, or a draft of whitespace only.
    Empty,
    /// The draft holds sendable text.
    Dirty,
}

/// Signal emitted by a successful send: the trimmed text and its target chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub chat_id: ChatId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftState {
    drafts: HashMap<ChatId, MessageInputState>,
    max_chars: Option<usize>,
}

impl DraftState {
    /// Creates drafts capped at `max_chars` characters; `None` means unlimited.
    pub fn with_limit(max_chars: Option<usize>) -> Self {
        Self {
            drafts: HashMap::new(),
            max_chars,
        }
    }

    pub fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    pub fn draft(&self, chat_id: &ChatId) -> &str {
        self.drafts
            .get(chat_id)
            .map(MessageInputState::text)
            .unwrap_or_default()
    }

    pub fn input(&self, chat_id: &ChatId) -> Option<&MessageInputState> {
        self.drafts.get(chat_id)
    }

    pub fn input_mut(&mut self, chat_id: &ChatId) -> &mut MessageInputState {
        self.drafts.entry(chat_id.clone()).or_default()
    }

    /// Replaces the chat's draft verbatim.
    ///
    /// Returns false and leaves the draft alone when a limit is set and `text` exceeds it.
    pub fn set_draft(&mut self, chat_id: &ChatId, text: impl Into<String>) -> bool {
        let text = text.into();
        if self
            .max_chars
            .is_some_and(|max| text.chars().count() > max)
        {
            return false;
        }

        self.input_mut(chat_id).set_text(text);
        true
    }

    /// Inserts a typed character, honoring the configured limit.
    pub fn insert_char(&mut self, chat_id: &ChatId, ch: char) -> bool {
        let max_chars = self.max_chars;
        self.input_mut(chat_id).insert_char(ch, max_chars)
    }

    pub fn composer_state(&self, chat_id: &ChatId) -> ComposerState {
        match self.drafts.get(chat_id) {
            Some(input) if !input.is_blank() => ComposerState::Dirty,
            _ => ComposerState::Empty,
        }
    }

    pub fn clear(&mut self, chat_id: &ChatId) {
        if let Some(input) = self.drafts.get_mut(chat_id) {
            input.clear();
        }
    }

    /// Returns the send request for a non-blank draft without touching the buffer.
    pub fn prepare_send(&self, chat_id: &ChatId) -> Option<SendRequest> {
        let text = self.draft(chat_id).trim();
        if text.is_empty() {
            return None;
        }

        Some(SendRequest {
            chat_id: chat_id.clone(),
            text: text.to_owned(),
        })
    }

    /// Emits a send request and clears the draft; blank drafts are a no-op.
    pub fn send(&mut self, chat_id: &ChatId) -> Option<SendRequest> {
        let request = self.prepare_send(chat_id)?;
        self.clear(chat_id);
        Some(request)
    }
}
