//! Screen rendering
//!
//! The screen is a title line, the scrolling message list, the input box and
//! a one-line help bar.

pub mod messages;
pub mod text;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::layout::ButtonRegion;
use messages::build_conversation;

pub const LOADING_TEXT: &str = "Consulting the knowledge base...";
pub const HELP_TEXT: &str =
    "Enter: send | Alt+1-9: follow-up | Alt+↑↓ Alt+Enter: select | PgUp/PgDn: scroll | Esc: quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_title(frame, layout[0]);
        self.render_messages(frame, layout[1]);

        self.regions.input_field = Some(layout[2]);
        frame.render_widget(&self.textarea, layout[2]);

        self.render_help(frame, layout[3]);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            self.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_messages(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        let view = build_conversation(self, inner.width);
        let total_lines = u16::try_from(view.lines.len()).unwrap_or(u16::MAX);

        self.viewport_height = inner.height;
        self.max_scroll = total_lines.saturating_sub(inner.height);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll);
        let top = self.max_scroll - self.scroll_offset;

        self.regions.message_list = Some(inner);
        self.regions.clear_buttons();
        for button in &view.buttons {
            let Ok(line) = u16::try_from(button.line) else {
                continue;
            };
            if line < top || line - top >= inner.height || button.width == 0 {
                continue;
            }
            self.regions.add_button(ButtonRegion {
                area: Rect::new(inner.x + button.x, inner.y + (line - top), button.width, 1),
                message_index: button.message_index,
                suggestion_index: button.suggestion_index,
            });
        }

        let paragraph = Paragraph::new(view.lines).block(block).scroll((top, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let line = if self.is_loading() {
            Line::from(Span::styled(
                LOADING_TEXT,
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
