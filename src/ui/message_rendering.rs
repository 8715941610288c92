//! Message list rendering logic.
//!
//! Incoming messages sit on the left with the time first. Outgoing messages are
//! right-aligned with the time after the text.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::ListItem,
};

use crate::domain::message::{Message, MessageOrigin};

use super::styles;

/// Text shown in place of a message with no content.
const EMPTY_MESSAGE_TEXT: &str = "[Empty message]";

/// Builds the header line ("14:05 them") and the body lines for a message.
pub fn message_lines(message: &Message) -> Vec<Line<'static>> {
    let alignment = alignment_for(message.from);
    let body_style = if message.from.is_outgoing() {
        styles::outgoing_message_style()
    } else {
        styles::incoming_message_style()
    };

    let header = if message.from.is_outgoing() {
        Line::from(vec![
            Span::styled(
                message.from.display_label().to_owned(),
                styles::chat_preview_style(),
            ),
            Span::raw(" "),
            Span::styled(message.time.clone(), styles::message_time_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled(message.time.clone(), styles::message_time_style()),
            Span::raw(" "),
            Span::styled(
                message.from.display_label().to_owned(),
                styles::chat_preview_style(),
            ),
        ])
    };

    let mut lines = vec![header.alignment(alignment)];

    if message.text.is_empty() {
        lines.push(
            Line::from(Span::styled(
                EMPTY_MESSAGE_TEXT.to_owned(),
                styles::chat_preview_style(),
            ))
            .alignment(alignment),
        );
    } else {
        for text_line in message.text.lines() {
            lines.push(
                Line::from(Span::styled(format!(" {text_line} "), body_style))
                    .alignment(alignment),
            );
        }
    }

    lines
}

/// Converts a message to a ListItem with a blank spacer line after it.
pub fn message_item(message: &Message) -> ListItem<'static> {
    let mut lines = message_lines(message);
    lines.push(Line::default());
    ListItem::new(lines)
}

fn alignment_for(origin: MessageOrigin) -> Alignment {
    match origin {
        MessageOrigin::Me => Alignment::Right,
        MessageOrigin::Them => Alignment::Left,
    }
}
