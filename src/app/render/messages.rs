//! Conversation rendering
//!
//! Builds the wrapped lines of the message list and records where each
//! suggestion button sits, relative to the first line of the conversation.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::text::wrap_text;
use crate::app::App;
use crate::chat::{Message, Role};

/// Indent of message bodies and buttons below the role heading
const BODY_INDENT: &str = "  ";
const BUTTON_GAP: u16 = 1;

pub const EMPTY_CONVERSATION_HINT: &str = "Ask a question to get started.";

/// Position of one button within the conversation lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPlacement {
    /// Index into [`ConversationView::lines`]
    pub line: usize,
    /// Column offset from the left edge of the message list
    pub x: u16,
    pub width: u16,
    pub message_index: usize,
    pub suggestion_index: usize,
}

/// Rendered conversation, before scrolling
#[derive(Debug, Default)]
pub struct ConversationView {
    pub lines: Vec<Line<'static>>,
    pub buttons: Vec<ButtonPlacement>,
}

/// Text drawn for a suggestion button
pub fn button_text(label: &str) -> String {
    format!("[ {} ]", label)
}

/// Build the conversation lines for a message list `width` cells wide
pub fn build_conversation(app: &App, width: u16) -> ConversationView {
    let mut view = ConversationView::default();
    let conversation = app.session.conversation();

    if conversation.is_empty() {
        view.lines.push(Line::from(Span::styled(
            EMPTY_CONVERSATION_HINT,
            Style::default().fg(Color::DarkGray),
        )));
        return view;
    }

    let body_width = width.saturating_sub(BODY_INDENT.len() as u16) as usize;
    let keyboard_target = app.keyboard_target();

    for (index, message) in conversation.messages().iter().enumerate() {
        if index > 0 {
            view.lines.push(Line::from(""));
        }

        view.lines.push(heading_line(message));

        let text = app.reveal.visible_text(index, message.text());
        let body_style = body_style(message);
        for line in wrap_text(text, body_width) {
            view.lines.push(Line::from(Span::styled(
                format!("{}{}", BODY_INDENT, line),
                body_style,
            )));
        }

        // Buttons appear once the whole answer is visible
        if message.suggestions().is_empty() || app.reveal.is_revealing(index) {
            continue;
        }

        let selected = if keyboard_target == Some(index) {
            app.selection.get_selected()
        } else {
            None
        };
        push_buttons(&mut view, message, index, width, selected);
    }

    view
}

fn heading_line(message: &Message) -> Line<'static> {
    let color = match message.role() {
        Role::User => Color::Cyan,
        Role::Assistant => Color::Green,
    };
    Line::from(Span::styled(
        message.role().label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn body_style(message: &Message) -> Style {
    if message.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    }
}

/// Lay the buttons of one message out left to right, wrapping onto new rows
fn push_buttons(
    view: &mut ConversationView,
    message: &Message,
    message_index: usize,
    width: u16,
    selected: Option<usize>,
) {
    let indent = BODY_INDENT.len() as u16;
    let mut spans: Vec<Span<'static>> = vec![Span::raw(BODY_INDENT)];
    let mut x = indent;

    for (suggestion_index, suggestion) in message.suggestions().iter().enumerate() {
        let text = button_text(&suggestion.label);
        let button_width = u16::try_from(text.width()).unwrap_or(u16::MAX);

        let row_has_buttons = x > indent;
        if row_has_buttons && x.saturating_add(BUTTON_GAP).saturating_add(button_width) > width {
            view.lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw(BODY_INDENT));
            x = indent;
        } else if row_has_buttons {
            spans.push(Span::raw(" "));
            x = x.saturating_add(BUTTON_GAP);
        }

        let mut style = Style::default().fg(Color::Yellow);
        if selected == Some(suggestion_index) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        view.buttons.push(ButtonPlacement {
            line: view.lines.len(),
            x,
            width: button_width.min(width.saturating_sub(x)),
            message_index,
            suggestion_index,
        });
        spans.push(Span::styled(text, style));
        x = x.saturating_add(button_width);
    }

    view.lines.push(Line::from(spans));
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod messages_tests;
