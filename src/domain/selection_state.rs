use super::chat::{Chat, ChatId};

/// Result of resolving the active chat against a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveChat<'a> {
    /// The selected id resolved to a chat.
    Found(&'a Chat),
    /// No selection yet, or the selected id is stale; the first chat stands in.
    FallbackToFirst(&'a Chat),
    /// The catalog is empty.
    Empty,
}

impl<'a> ActiveChat<'a> {
    pub fn chat(self) -> Option<&'a Chat> {
        match self {
            ActiveChat::Found(chat) | ActiveChat::FallbackToFirst(chat) => Some(chat),
            ActiveChat::Empty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    active_chat_id: Option<ChatId>,
}

impl SelectionState {
    pub fn active_chat_id(&self) -> Option<&ChatId> {
        self.active_chat_id.as_ref()
    }

    /// Stores the id as-is. Unknown ids are absorbed by `get_active`.
    pub fn select(&mut self, chat_id: ChatId) {
        self.active_chat_id = Some(chat_id);
    }

    pub fn get_active<'a>(&self, chats: &'a [Chat]) -> ActiveChat<'a> {
        let Some(first) = chats.first() else {
            return ActiveChat::Empty;
        };

        self.active_chat_id
            .as_ref()
            .and_then(|id| chats.iter().find(|chat| &chat.id == id))
            .map_or(ActiveChat::FallbackToFirst(first), ActiveChat::Found)
    }

    /// Returns true when `chat_id` is the chat `get_active` resolves to.
    pub fn is_active(&self, chats: &[Chat], chat_id: &ChatId) -> bool {
        self.get_active(chats)
            .chat()
            .is_some_and(|chat| &chat.id == chat_id)
    }
}
