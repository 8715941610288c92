//! The messaging workspace: catalog, selection, search and drafts combined.
//!
//! Each cell stays independent; this type only wires the derived views
//! (filtered chat list, active chat, its messages and its draft) together.

use super::{
    chat::{Chat, ChatId},
    conversation_store::ConversationStore,
    draft_state::{ComposerState, DraftState},
    message::Message,
    search_filter::SearchFilter,
    selection_state::{ActiveChat, SelectionState},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceState {
    store: ConversationStore,
    selection: SelectionState,
    search: SearchFilter,
    drafts: DraftState,
}

impl WorkspaceState {
    pub fn new(store: ConversationStore, drafts: DraftState) -> Self {
        let mut search = SearchFilter::default();
        search.refresh(store.list_chats(), store.revision());

        Self {
            store,
            selection: SelectionState::default(),
            search,
            drafts,
        }
    }

    pub fn chats(&self) -> &[Chat] {
        self.store.list_chats()
    }

    pub fn search(&self) -> &SearchFilter {
        &self.search
    }

    pub fn drafts(&self) -> &DraftState {
        &self.drafts
    }

    pub fn drafts_mut(&mut self) -> &mut DraftState {
        &mut self.drafts
    }

    // Search -----------------------------------------------------------------

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
        self.refresh_filter();
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.search.push_char(ch);
        self.refresh_filter();
    }

    pub fn pop_query_char(&mut self) {
        self.search.pop_char();
        self.refresh_filter();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Chats matching the current query, in catalog order.
    pub fn filtered_chats(&self) -> Vec<&Chat> {
        let chats = self.store.list_chats();
        self.search
            .matches()
            .iter()
            .filter_map(|index| chats.get(*index))
            .collect()
    }

    fn refresh_filter(&mut self) {
        self.search
            .refresh(self.store.list_chats(), self.store.revision());
    }

    // Selection --------------------------------------------------------------

    pub fn select(&mut self, chat_id: ChatId) {
        tracing::debug!(
            chat_id = %chat_id,
            previous = ?self.selection.active_chat_id(),
            "active chat selected"
        );
        self.selection.select(chat_id);
    }

    /// Resolves the active chat against the full catalog, not the filtered view.
    pub fn active(&self) -> ActiveChat<'_> {
        self.selection.get_active(self.store.list_chats())
    }

    pub fn active_chat(&self) -> Option<&Chat> {
        self.active().chat()
    }

    pub fn active_chat_id(&self) -> Option<ChatId> {
        self.active_chat().map(|chat| chat.id.clone())
    }

    pub fn is_active(&self, chat_id: &ChatId) -> bool {
        self.selection.is_active(self.store.list_chats(), chat_id)
    }

    pub fn active_messages(&self) -> &[Message] {
        match self.active_chat() {
            Some(chat) => self.store.messages_for(&chat.id),
            None => &[],
        }
    }

    // Drafts -----------------------------------------------------------------

    pub fn active_draft(&self) -> &str {
        match self.active_chat() {
            Some(chat) => self.drafts.draft(&chat.id),
            None => "",
        }
    }

    pub fn active_composer_state(&self) -> ComposerState {
        match self.active_chat() {
            Some(chat) => self.drafts.composer_state(&chat.id),
            None => ComposerState::Empty,
        }
    }

    /// Extension point for local delivery; keeps the filter in sync with the new preview.
    pub fn append_outgoing(&mut self, chat_id: &ChatId, text: &str, time: &str) -> bool {
        let appended = self.store.append_outgoing(chat_id, text, time).is_some();
        if appended {
            self.refresh_filter();
        }
        appended
    }
}
