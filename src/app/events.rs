use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;

/// Lines moved per PageUp/PageDown when the viewport size is not yet known
const DEFAULT_PAGE_LINES: u16 = 10;
/// Lines moved per mouse wheel notch
const WHEEL_LINES: u16 = 3;

impl App {
    /// Handle one terminal event and update application state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Any key shows the newest answer in full, buttons included
                self.reveal.finish();
                self.handle_key_event(key);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => {
                // The input box is a single logical line
                self.textarea.insert_str(text.replace(['\r', '\n'], " "));
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        self.textarea.input(key);
    }

    /// Handle keys that are not passed to the input box
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Enter if alt => {
                self.activate_selected();
                true
            }
            KeyCode::Enter => {
                self.submit_input();
                true
            }
            // Alt+1..9: follow the nth suggestion of the latest answer
            KeyCode::Char(c @ '1'..='9') if alt => {
                if let Some(message_index) = self.keyboard_target() {
                    let suggestion_index = (c as usize) - ('1' as usize);
                    self.activate_suggestion(message_index, suggestion_index);
                }
                true
            }
            KeyCode::Up if alt => {
                let count = self.keyboard_suggestion_count();
                self.selection.navigate_previous(count);
                true
            }
            KeyCode::Down if alt => {
                let count = self.keyboard_suggestion_count();
                self.selection.navigate_next(count);
                true
            }
            KeyCode::PageUp => {
                self.scroll_up(self.page_lines());
                true
            }
            KeyCode::PageDown => {
                self.scroll_down(self.page_lines());
                true
            }
            _ => false,
        }
    }

    fn page_lines(&self) -> u16 {
        match self.viewport_height {
            0 => DEFAULT_PAGE_LINES,
            height => height.saturating_sub(1).max(1),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.reveal.finish();
                let button = self.regions.button_at(mouse.column, mouse.row);
                mouse_click::handle_click(self, button);
            }
            MouseEventKind::ScrollUp if self.regions.is_in_message_list(mouse.column, mouse.row) => {
                self.scroll_up(WHEEL_LINES);
            }
            MouseEventKind::ScrollDown
                if self.regions.is_in_message_list(mouse.column, mouse.row) =>
            {
                self.scroll_down(WHEEL_LINES);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
