//! Mouse click handling
//!
//! Routes clicks on suggestion buttons to the chat session.

use super::app_state::App;
use crate::layout::ButtonRegion;

/// Handle left mouse button click on the given button
///
/// Clicks outside any button are ignored, as are clicks on buttons whose
/// message is still being revealed.
pub fn handle_click(app: &mut App, button: Option<ButtonRegion>) {
    let Some(button) = button else {
        return;
    };

    if app.reveal.is_revealing(button.message_index) {
        return;
    }

    log::debug!(
        "Clicked suggestion {} of message {}",
        button.suggestion_index,
        button.message_index
    );
    app.activate_suggestion(button.message_index, button.suggestion_index);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
