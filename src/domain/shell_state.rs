use super::{chat::ChatId, workspace::WorkspaceState};

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    ChatList,
    Search,
    Composer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    active_pane: ActivePane,
    workspace: WorkspaceState,
    /// Highlighted row within the filtered chat list.
    list_cursor: usize,
    notice: Option<String>,
}

impl ShellState {
    pub fn new(workspace: WorkspaceState) -> Self {
        let mut state = Self {
            running: true,
            active_pane: ActivePane::ChatList,
            workspace,
            list_cursor: 0,
            notice: None,
        };
        state.sync_list_cursor();
        state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn workspace(&self) -> &WorkspaceState {
        &self.workspace
    }

    pub fn workspace_mut(&mut self) -> &mut WorkspaceState {
        &mut self.workspace
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Index of the highlighted row in the filtered list, if the list is non-empty.
    pub fn list_cursor(&self) -> Option<usize> {
        let len = self.workspace.filtered_chats().len();
        (len > 0).then(|| self.list_cursor.min(len - 1))
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.workspace.filtered_chats().len();
        if len == 0 {
            return;
        }
        self.list_cursor = std::cmp::min(self.list_cursor.saturating_add(1), len - 1);
    }

    pub fn move_cursor_up(&mut self) {
        self.list_cursor = self.list_cursor.saturating_sub(1);
    }

    /// Chat under the highlight in the filtered list.
    pub fn highlighted_chat_id(&self) -> Option<ChatId> {
        let cursor = self.list_cursor()?;
        self.workspace
            .filtered_chats()
            .get(cursor)
            .map(|chat| chat.id.clone())
    }

    /// Keeps the highlight on `chat_id` after the filtered list changed shape.
    ///
    /// Falls back to `sync_list_cursor` when the chat is no longer visible.
    pub fn restore_highlight(&mut self, chat_id: &ChatId) {
        let position = self
            .workspace
            .filtered_chats()
            .iter()
            .position(|chat| &chat.id == chat_id);

        match position {
            Some(position) => self.list_cursor = position,
            None => self.sync_list_cursor(),
        }
    }

    /// Puts the highlight on the active chat when it is visible, else on the first row.
    pub fn sync_list_cursor(&mut self) {
        let workspace = &self.workspace;
        self.list_cursor = workspace
            .filtered_chats()
            .iter()
            .position(|chat| workspace.is_active(&chat.id))
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{
        chat::{Chat, ChatId},
        conversation_store::ConversationStore,
        draft_state::DraftState,
    };

    fn state() -> ShellState {
        let chats = vec![
            Chat::new("c1", "Security Team", "Key rotation complete."),
            Chat::new("c2", "Product", "Ship checklist is ready."),
            Chat::new("c3", "Design", "Updated icon set uploaded."),
        ];
        ShellState::new(WorkspaceState::new(
            ConversationStore::new(chats, HashMap::new()),
            DraftState::default(),
        ))
    }

    #[test]
    fn starts_running_on_chat_list() {
        let state = state();

        assert!(state.is_running());
        assert_eq!(state.active_pane(), ActivePane::ChatList);
        assert_eq!(state.list_cursor(), Some(0));
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let mut state = state();

        state.move_cursor_down();
        state.move_cursor_down();
        state.move_cursor_down();
        assert_eq!(state.list_cursor(), Some(2));

        state.move_cursor_up();
        state.move_cursor_up();
        state.move_cursor_up();
        assert_eq!(state.list_cursor(), Some(0));
    }

    #[test]
    fn cursor_is_clamped_after_list_shrinks() {
        let mut state = state();
        state.move_cursor_down();
        state.move_cursor_down();

        state.workspace_mut().set_query("prod");

        assert_eq!(state.list_cursor(), Some(0));
    }

    #[test]
    fn cursor_is_none_for_empty_filter_result() {
        let mut state = state();

        state.workspace_mut().set_query("zzz");
        state.move_cursor_down();

        assert_eq!(state.list_cursor(), None);
    }

    #[test]
    fn sync_places_cursor_on_active_chat() {
        let mut state = state();
        state.workspace_mut().select(ChatId::from("c3"));

        state.sync_list_cursor();

        assert_eq!(state.list_cursor(), Some(2));
    }

    #[test]
    fn highlight_follows_its_chat_when_rows_shift() {
        let mut state = state();
        state.move_cursor_down();
        assert_eq!(state.highlighted_chat_id(), Some(ChatId::from("c2")));

        state.workspace_mut().set_query("product");
        state.restore_highlight(&ChatId::from("c2"));
        assert_eq!(state.list_cursor(), Some(0));

        state.workspace_mut().clear_query();
        state.restore_highlight(&ChatId::from("c2"));
        assert_eq!(state.list_cursor(), Some(1));
    }

    #[test]
    fn restore_highlight_falls_back_when_chat_is_hidden() {
        let mut state = state();
        state.workspace_mut().select(ChatId::from("c3"));
        state.workspace_mut().set_query("design");

        state.restore_highlight(&ChatId::from("c1"));

        assert_eq!(state.highlighted_chat_id(), Some(ChatId::from("c3")));
    }

    #[test]
    fn stop_ends_session() {
        let mut state = state();

        state.stop();

        assert!(!state.is_running());
    }
}
