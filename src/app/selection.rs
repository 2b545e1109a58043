//! Keyboard selection of suggestion buttons
//!
//! Tracks which button of the latest assistant turn is highlighted.

/// Selection state for suggestion navigation
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Currently selected suggestion index (None = no selection)
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Move to the next suggestion (Alt+Down), wrapping to the first
    pub fn navigate_next(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(current) => Some((current + 1) % suggestion_count),
            None => Some(0),
        };
    }

    /// Move to the previous suggestion (Alt+Up), wrapping to the last
    pub fn navigate_previous(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(0) | None => Some(suggestion_count - 1),
            Some(current) => Some(current - 1),
        };
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
