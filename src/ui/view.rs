use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    chat::Chat,
    draft_state::ComposerState,
    message_input_state::MessageInputState,
    selection_state::ActiveChat,
    shell_state::{ActivePane, ShellState},
};

use super::message_input::render_message_input;
use super::message_rendering::message_item;
use super::styles;

const BRAND: &str = "CipherTeams";
const LOCK_BADGE: &str = "[E2EE]";
const TAGLINE: &str = "Encrypted collaboration · Verified devices · Zero-trust";
const SEARCH_PLACEHOLDER: &str = "Search chats (/)";
const ACTIVE_MARKER: &str = "● ";
const ELLIPSIS: char = '…';

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [header_area, content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let [sidebar_area, conversation_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .areas(content_area);

    // Search box and composer are 3 lines each: 1 border + 1 text + 1 border
    let [search_area, chats_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .areas(sidebar_area);

    let [messages_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(conversation_area);

    let active_pane = state.active_pane();
    frame.render_widget(Paragraph::new(header_line()), header_area);
    render_search_box(frame, search_area, state, active_pane);
    render_chat_list_panel(frame, chats_area, state, active_pane);
    render_messages_panel(frame, messages_area, state);

    let workspace = state.workspace();
    let empty_input = MessageInputState::default();
    let input_state = workspace
        .active_chat_id()
        .and_then(|chat_id| workspace.drafts().input(&chat_id))
        .unwrap_or(&empty_input);
    let title = composer_title(workspace.active_draft(), workspace.drafts().max_chars());
    render_message_input(frame, input_area, input_state, &title, active_pane);

    frame.render_widget(Paragraph::new(status_line(state)), status_area);
}

fn header_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(BRAND, styles::brand_style()),
        Span::raw(" "),
        Span::styled(LOCK_BADGE, styles::lock_badge_style()),
        Span::raw("  "),
        Span::styled(TAGLINE, styles::tagline_style()),
    ])
}

fn border_style_for(is_active: bool) -> Style {
    if is_active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    }
}

fn render_search_box(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ShellState,
    active_pane: ActivePane,
) {
    let is_focused = active_pane == ActivePane::Search;
    let line = search_line(state.workspace().query());

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style_for(is_focused)),
    );
    frame.render_widget(paragraph, area);

    if is_focused {
        let query_width = state.workspace().query().width().min(u16::MAX as usize) as u16;
        let cursor_x = area.x.saturating_add(1).saturating_add(query_width);
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

fn search_line(query: &str) -> Line<'static> {
    if query.is_empty() {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            styles::input_placeholder_style(),
        ))
    } else {
        Line::from(Span::styled(query.to_owned(), styles::input_text_style()))
    }
}

fn render_chat_list_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ShellState,
    active_pane: ActivePane,
) {
    let border_style = border_style_for(active_pane == ActivePane::ChatList);
    let workspace = state.workspace();
    let chats = workspace.filtered_chats();

    if chats.is_empty() {
        let message = if workspace.search().is_active() {
            "No chats match your search."
        } else {
            "No conversations yet."
        };
        let panel = Paragraph::new(message).block(
            Block::default()
                .title("Chats")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(panel, area);
        return;
    }

    // Inner width = area width - 2 (borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem<'static>> = chats
        .iter()
        .map(|chat| {
            let is_active = workspace.is_active(&chat.id);
            ListItem::new(chat_list_item_line(chat, is_active, inner_width))
        })
        .collect();

    let title = chat_list_title(chats.len(), workspace.chats().len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(styles::highlight_style());

    let mut list_state = ListState::default();
    list_state.select(state.list_cursor());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn chat_list_title(shown: usize, total: usize) -> String {
    if shown == total {
        format!("Chats ({total})")
    } else {
        format!("Chats ({shown}/{total})")
    }
}

fn chat_list_item_line(chat: &Chat, is_active: bool, width: usize) -> Line<'static> {
    let marker = if is_active { ACTIVE_MARKER } else { "  " };
    let badge = chat
        .unread_badge()
        .map(|count| format!(" [{count}]"))
        .unwrap_or_default();

    let preview = normalize_preview_for_chat_row(&chat.last);
    let fixed_width = marker.width() + chat.name.width() + 1 + badge.width();
    let available = width.saturating_sub(fixed_width);
    let display_preview = truncate_to_width(&preview, available);
    let padding = available.saturating_sub(display_preview.width());

    let mut spans = vec![
        Span::styled(marker, styles::active_chat_marker_style()),
        Span::styled(chat.name.clone(), styles::chat_name_style()),
        Span::raw(" "),
        Span::styled(display_preview, styles::chat_preview_style()),
    ];

    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
    }

    if !badge.is_empty() {
        spans.push(Span::styled(badge, styles::unread_count_style()));
    }

    Line::from(spans)
}

fn normalize_preview_for_chat_row(preview: &str) -> String {
    preview.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts `text` to at most `max_width` terminal columns, ending with an ellipsis when shortened.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        truncated.push(ch);
    }
    truncated.push(ELLIPSIS);
    truncated
}

fn render_messages_panel(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let workspace = state.workspace();
    let title = messages_title(workspace.active());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());

    if workspace.active_chat().is_none() {
        let panel = Paragraph::new("No conversations to show").block(block);
        frame.render_widget(panel, area);
        return;
    }

    let messages = workspace.active_messages();
    if messages.is_empty() {
        let panel = Paragraph::new("No messages in this chat").block(block);
        frame.render_widget(panel, area);
        return;
    }

    let items: Vec<ListItem<'static>> = messages.iter().map(message_item).collect();
    let list = List::new(items).block(block);

    // Keep the newest message in view.
    let mut list_state = ListState::default();
    list_state.select(Some(messages.len() - 1));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn messages_title(active: ActiveChat<'_>) -> String {
    match active.chat() {
        Some(chat) => format!("{} · end-to-end encrypted", chat.name),
        None => "Messages".to_owned(),
    }
}

/// Character counter shown on the composer border when drafts are capped.
fn composer_title(draft: &str, max_chars: Option<usize>) -> String {
    match max_chars {
        Some(max) => format!("{}/{max}", draft.chars().count()),
        None => String::new(),
    }
}

fn status_line(state: &ShellState) -> String {
    let hint = match state.active_pane() {
        ActivePane::ChatList => {
            "j/k: navigate | Enter: open | /: search | Esc: clear search | i: compose | q: quit"
        }
        ActivePane::Search => "type to filter | Enter/Esc: done",
        ActivePane::Composer => match state.workspace().active_composer_state() {
            ComposerState::Dirty => "Enter: send | Ctrl+U: clear to start | Esc: back to chats",
            ComposerState::Empty => "type a message | Esc: back to chats",
        },
    };

    match state.notice() {
        Some(notice) => format!("{notice} | {hint}"),
        None => hint.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        domain::{chat::ChatId, draft_state::DraftState, workspace::WorkspaceState},
        infra::seed::demo_store,
    };

    const TEST_WIDTH: usize = 40;

    fn demo_state() -> ShellState {
        ShellState::new(WorkspaceState::new(demo_store(), DraftState::default()))
    }

    /// Extracts text content from Line for testing.
    fn line_to_string(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render_to_text(state: &ShellState) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("render must succeed");

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn chat_row_includes_name_preview_and_badge() {
        let chat = Chat::new("c1", "Security", "Keys rotated").with_unread(2);
        let text = line_to_string(&chat_list_item_line(&chat, false, TEST_WIDTH));

        assert!(text.contains("Security"));
        assert!(text.contains("Keys rotated"));
        assert!(text.ends_with("[2]"));
    }

    #[test]
    fn chat_row_omits_zero_badge() {
        let chat = Chat::new("c1", "Security", "Keys rotated").with_unread(0);
        let text = line_to_string(&chat_list_item_line(&chat, false, TEST_WIDTH));

        assert!(!text.contains("[0]"));
    }

    #[test]
    fn chat_row_marks_active_chat() {
        let chat = Chat::new("c1", "Security", "Keys rotated");

        let active = line_to_string(&chat_list_item_line(&chat, true, TEST_WIDTH));
        let inactive = line_to_string(&chat_list_item_line(&chat, false, TEST_WIDTH));

        assert!(active.starts_with(ACTIVE_MARKER));
        assert!(inactive.starts_with("  "));
    }

    #[test]
    fn chat_row_fits_width_when_preview_is_long() {
        let chat = Chat::new("c1", "Ops", "a very long preview that will not fit in the row")
            .with_unread(5);
        let text = line_to_string(&chat_list_item_line(&chat, false, 24));

        assert_eq!(text.width(), 24);
        assert!(text.contains(ELLIPSIS));
        assert!(text.ends_with("[5]"));
    }

    #[test]
    fn chat_row_normalizes_whitespace() {
        let chat = Chat::new("c1", "Ops", "  Incident\n\nreview\t at 3pm ");
        let text = line_to_string(&chat_list_item_line(&chat, false, TEST_WIDTH));

        assert!(text.contains("Incident review at 3pm"));
    }

    #[test]
    fn truncate_respects_wide_characters() {
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn chat_list_title_shows_filtered_count() {
        assert_eq!(chat_list_title(4, 4), "Chats (4)");
        assert_eq!(chat_list_title(1, 4), "Chats (1/4)");
    }

    #[test]
    fn search_line_shows_placeholder_until_typed() {
        assert_eq!(line_to_string(&search_line("")), SEARCH_PLACEHOLDER);
        assert_eq!(line_to_string(&search_line("ops")), "ops");
    }

    #[test]
    fn status_line_prefers_notice_with_hint() {
        let mut state = demo_state();
        assert!(status_line(&state).contains("q: quit"));

        state.set_notice("Draft limit reached.");
        state.set_active_pane(ActivePane::Composer);

        assert_eq!(
            status_line(&state),
            "Draft limit reached. | type a message | Esc: back to chats"
        );
    }

    #[test]
    fn composer_hint_offers_send_only_for_dirty_draft() {
        let mut state = demo_state();
        state.set_active_pane(ActivePane::Composer);
        let chat_id = ChatId::from("c1");

        state.workspace_mut().drafts_mut().set_draft(&chat_id, "   ");
        assert!(!status_line(&state).contains("Enter: send"));

        state.workspace_mut().drafts_mut().set_draft(&chat_id, "ready");
        assert!(status_line(&state).starts_with("Enter: send"));
    }

    #[test]
    fn composer_title_counts_against_limit() {
        assert_eq!(composer_title("héllo", Some(10)), "5/10");
        assert_eq!(composer_title("anything", None), "");
    }

    #[test]
    fn render_shows_draft_counter_when_capped() {
        let workspace = WorkspaceState::new(demo_store(), DraftState::with_limit(Some(140)));
        let mut state = ShellState::new(workspace);
        state
            .workspace_mut()
            .drafts_mut()
            .set_draft(&ChatId::from("c1"), "hello");

        let text = render_to_text(&state);

        assert!(text.contains("5/140"));
        assert!(text.contains("> hello"));
    }

    #[test]
    fn render_shows_brand_chats_and_fallback_conversation() {
        let text = render_to_text(&demo_state());

        assert!(text.contains(BRAND));
        assert!(text.contains(LOCK_BADGE));
        assert!(text.contains("Chats (4)"));
        assert!(text.contains("Security Team · end-to-end encrypted"));
        assert!(text.contains("Key rotation complete."));
        assert!(text.contains("Write a message"));
    }

    #[test]
    fn render_reports_no_matches_for_empty_filter() {
        let mut state = demo_state();
        state.workspace_mut().set_query("zzz");

        let text = render_to_text(&state);

        assert!(text.contains("No chats match your search."));
        assert!(text.contains("Security Team · end-to-end encrypted"));
    }

    #[test]
    fn render_handles_empty_catalog() {
        let workspace = WorkspaceState::new(Default::default(), DraftState::default());
        let state = ShellState::new(workspace);

        let text = render_to_text(&state);

        assert!(text.contains("No conversations yet."));
        assert!(text.contains("No conversations to show"));
    }
}
