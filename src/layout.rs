//! Screen regions recorded during rendering
//!
//! The renderer records where each suggestion button landed so that mouse
//! clicks can be mapped back to the suggestion under the cursor.

use ratatui::layout::{Position, Rect};

/// Where one suggestion button was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRegion {
    pub area: Rect,
    /// Index of the assistant message that owns the button
    pub message_index: usize,
    /// Position of the suggestion within that message's set
    pub suggestion_index: usize,
}

/// Regions from the most recent frame
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub message_list: Option<Rect>,
    pub input_field: Option<Rect>,
    buttons: Vec<ButtonRegion>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the buttons of the previous frame
    pub fn clear_buttons(&mut self) {
        self.buttons.clear();
    }

    pub fn add_button(&mut self, button: ButtonRegion) {
        self.buttons.push(button);
    }

    pub fn buttons(&self) -> &[ButtonRegion] {
        &self.buttons
    }

    /// Button under the given screen cell, if any
    pub fn button_at(&self, column: u16, row: u16) -> Option<ButtonRegion> {
        let position = Position::new(column, row);
        self.buttons
            .iter()
            .find(|b| b.area.contains(position))
            .copied()
    }

    /// Whether the cell lies inside the message list
    pub fn is_in_message_list(&self, column: u16, row: u16) -> bool {
        self.message_list
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}
