use anyhow::Result;

use crate::domain::{
    chat::ChatId,
    events::{AppEvent, KeyInput},
    shell_state::{ActivePane, ShellState},
    workspace::WorkspaceState,
};

use super::{
    contracts::ShellOrchestrator,
    send_message::{send_active_draft, MessageSender, SendOutcome, SendPolicy},
};

const DRAFT_LIMIT_NOTICE: &str = "Draft limit reached.";

pub struct DefaultShellOrchestrator<M>
where
    M: MessageSender,
{
    state: ShellState,
    sender: M,
    policy: SendPolicy,
}

impl<M> DefaultShellOrchestrator<M>
where
    M: MessageSender,
{
    pub fn new(workspace: WorkspaceState, sender: M, policy: SendPolicy) -> Self {
        Self {
            state: ShellState::new(workspace),
            sender,
            policy,
        }
    }

    fn handle_chat_list_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "q" => self.state.stop(),
            "j" | "down" => self.state.move_cursor_down(),
            "k" | "up" => self.state.move_cursor_up(),
            "enter" | "l" => self.open_highlighted_chat(),
            "/" => self.state.set_active_pane(ActivePane::Search),
            "i" | "tab" => {
                if self.state.workspace().active_chat().is_some() {
                    self.state.set_active_pane(ActivePane::Composer);
                }
            }
            "esc" => {
                if !self.state.workspace().query().is_empty() {
                    self.state.workspace_mut().clear_query();
                    self.state.sync_list_cursor();
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "enter" | "esc" => self.state.set_active_pane(ActivePane::ChatList),
            "down" => self.state.move_cursor_down(),
            "up" => self.state.move_cursor_up(),
            "backspace" => {
                self.state.workspace_mut().pop_query_char();
                self.state.sync_list_cursor();
            }
            _ => {
                if let Some(ch) = key.as_char() {
                    self.state.workspace_mut().push_query_char(ch);
                    self.state.sync_list_cursor();
                }
            }
        }
    }

    fn handle_composer_key(&mut self, key: &KeyInput) {
        let Some(chat_id) = self.state.workspace().active_chat_id() else {
            self.state.set_active_pane(ActivePane::ChatList);
            return;
        };

        if key.ctrl {
            if key.key == "u" {
                self.kill_to_line_start(&chat_id);
            }
            return;
        }

        match key.key.as_str() {
            "esc" => self.state.set_active_pane(ActivePane::ChatList),
            "enter" => self.send_draft(),
            "backspace" => self
                .state
                .workspace_mut()
                .drafts_mut()
                .input_mut(&chat_id)
                .delete_char_before(),
            "delete" => self
                .state
                .workspace_mut()
                .drafts_mut()
                .input_mut(&chat_id)
                .delete_char_at(),
            "left" => self
                .state
                .workspace_mut()
                .drafts_mut()
                .input_mut(&chat_id)
                .move_cursor_left(),
            "right" => self
                .state
                .workspace_mut()
                .drafts_mut()
                .input_mut(&chat_id)
                .move_cursor_right(),
            "home" => self
                .state
                .workspace_mut()
                .drafts_mut()
                .input_mut(&chat_id)
                .move_cursor_home(),
            "end" => self
                .state
                .workspace_mut()
                .drafts_mut()
                .input_mut(&chat_id)
                .move_cursor_end(),
            _ => {
                if let Some(ch) = key.as_char() {
                    if !self
                        .state
                        .workspace_mut()
                        .drafts_mut()
                        .insert_char(&chat_id, ch)
                    {
                        self.state.set_notice(DRAFT_LIMIT_NOTICE);
                    }
                }
            }
        }
    }

    /// Ctrl+U: drops the text before the cursor and keeps the rest.
    fn kill_to_line_start(&mut self, chat_id: &ChatId) {
        let drafts = self.state.workspace_mut().drafts_mut();
        let rest: String = drafts
            .input(chat_id)
            .map(|input| input.text().chars().skip(input.cursor_position()).collect())
            .unwrap_or_default();

        if drafts.set_draft(chat_id, rest) {
            drafts.input_mut(chat_id).move_cursor_home();
        }
    }

    fn open_highlighted_chat(&mut self) {
        let Some(cursor) = self.state.list_cursor() else {
            return;
        };
        let chat_id = self
            .state
            .workspace()
            .filtered_chats()
            .get(cursor)
            .map(|chat| chat.id.clone());

        if let Some(chat_id) = chat_id {
            self.state.workspace_mut().select(chat_id);
            self.state.clear_notice();
        }
    }

    fn send_draft(&mut self) {
        let sent_at = current_time_label();
        let highlighted = self.state.highlighted_chat_id();
        let outcome = send_active_draft(
            self.state.workspace_mut(),
            &self.sender,
            self.policy,
            &sent_at,
        );

        match outcome {
            SendOutcome::Ignored => {}
            SendOutcome::Sent {
                receipt, appended, ..
            } => {
                // An appended message changes the preview, so the filtered rows can shift.
                if appended {
                    match highlighted {
                        Some(chat_id) => self.state.restore_highlight(&chat_id),
                        None => self.state.sync_list_cursor(),
                    }
                }
                self.state.set_notice(receipt.acknowledgement);
            }
            SendOutcome::Failed {
                error, draft_kept, ..
            } => {
                let suffix = if draft_kept {
                    " Draft kept."
                } else {
                    ""
                };
                self.state
                    .set_notice(format!("{}{suffix}", error.user_message()));
            }
        }
    }
}

impl<M> ShellOrchestrator for DefaultShellOrchestrator<M>
where
    M: MessageSender,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => match self.state.active_pane() {
                ActivePane::ChatList => self.handle_chat_list_key(&key),
                ActivePane::Search => self.handle_search_key(&key),
                ActivePane::Composer => self.handle_composer_key(&key),
            },
        }

        Ok(())
    }
}

fn current_time_label() -> String {
    chrono::Local::now().format("%-H:%M").to_string()
}
