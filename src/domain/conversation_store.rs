//! In-memory catalog of chats and their message histories.

use std::collections::HashMap;

use super::{
    chat::{Chat, ChatId},
    message::{Message, MessageId, MessageOrigin},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationStore {
    chats: Vec<Chat>,
    messages: HashMap<ChatId, Vec<Message>>,
    revision: u64,
}

impl ConversationStore {
    /// Builds a store from seed data. Messages for chats not in `chats` are kept
    /// but never reachable through `list_chats`.
    pub fn new(chats: Vec<Chat>, messages: HashMap<ChatId, Vec<Message>>) -> Self {
        Self {
            chats,
            messages,
            revision: 0,
        }
    }

    pub fn list_chats(&self) -> &[Chat] {
        &self.chats
    }

    /// Returns the chat's messages oldest first, or an empty slice for unknown ids.
    pub fn messages_for(&self, chat_id: &ChatId) -> &[Message] {
        self.messages
            .get(chat_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn chat(&self, chat_id: &ChatId) -> Option<&Chat> {
        self.chats.iter().find(|chat| &chat.id == chat_id)
    }

    /// Monotonic counter bumped whenever the catalog changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends an outgoing message to a known chat and refreshes its preview.
    ///
    /// Returns the new message id, or `None` when the chat is unknown.
    pub fn append_outgoing(
        &mut self,
        chat_id: &ChatId,
        text: &str,
        time: &str,
    ) -> Option<MessageId> {
        let chat = self.chats.iter_mut().find(|chat| &chat.id == chat_id)?;
        chat.last = text.to_owned();

        let messages = self.messages.entry(chat_id.clone()).or_default();
        let id = next_message_id(messages);
        messages.push(Message {
            id: id.clone(),
            from: MessageOrigin::Me,
            text: text.to_owned(),
            time: time.to_owned(),
        });

        self.revision = self.revision.wrapping_add(1);
        Some(id)
    }
}

/// Picks `m<N>` starting after the current length, skipping ids already taken.
fn next_message_id(messages: &[Message]) -> MessageId {
    let mut candidate = messages.len() + 1;
    loop {
        let id = format!("m{candidate}");
        if !messages.iter().any(|message| message.id.as_str() == id) {
            return MessageId::new(id);
        }
        candidate += 1;
    }
}
