use std::sync::mpsc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use super::*;
use crate::test_utils::test_helpers::{archetype_answer, test_config};

fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

fn answered_app() -> App {
    let mut app = App::new(&test_config(), false);
    let query = app.session.submit_text("What is an Archetype?").unwrap();
    app.session.resolve(&query, Ok(archetype_answer()));
    app
}

#[test]
fn test_initial_screen_shows_title_placeholder_and_help() {
    let mut app = App::new(&test_config(), false);
    let output = render_to_string(&mut app, 100, 20);

    assert!(output.contains("QnA Chatbot"));
    assert!(output.contains("Send a message..."));
    assert!(output.contains("Ask a question to get started."));
    assert!(output.contains("Esc: quit"));
}

#[test]
fn test_answer_and_button_are_drawn() {
    let mut app = answered_app();
    let output = render_to_string(&mut app, 60, 20);

    assert!(output.contains("You"));
    assert!(output.contains("What is an Archetype?"));
    assert!(output.contains("Assistant"));
    assert!(output.contains("An archetype is..."));
    assert!(output.contains("[ Tell me more ]"));
}

#[test]
fn test_button_regions_map_to_screen_cells() {
    let mut app = answered_app();
    render_to_string(&mut app, 60, 20);

    // Title row, then the bordered message list starting at row 1
    let buttons = app.regions.buttons();
    assert_eq!(buttons.len(), 1);
    assert_eq!(buttons[0].area, Rect::new(3, 7, 16, 1));
    assert_eq!(buttons[0].message_index, 1);
    assert_eq!(buttons[0].suggestion_index, 0);
    assert_eq!(app.regions.button_at(5, 7), Some(buttons[0]));
}

#[test]
fn test_loading_indicator_replaces_help() {
    let mut app = App::new(&test_config(), false);
    let (request_tx, _request_rx) = mpsc::channel();
    let (_response_tx, response_rx) = mpsc::channel();
    app.set_channels(request_tx, response_rx);

    app.textarea.insert_str("hello");
    app.submit_input();
    let output = render_to_string(&mut app, 60, 20);

    assert!(app.is_loading());
    assert!(output.contains(LOADING_TEXT));
    assert!(!output.contains("Esc: quit"));
}

#[test]
fn test_long_conversation_sticks_to_bottom() {
    let mut app = App::new(&test_config(), false);
    for i in 0..10 {
        let query = app.session.submit_text(&format!("question {}", i)).unwrap();
        app.session
            .resolve(&query, Ok(crate::qna::AnswerRecord::no_answer()));
    }

    let output = render_to_string(&mut app, 60, 20);

    assert!(app.max_scroll > 0);
    assert!(output.contains("question 9"));
    assert!(!output.contains("question 0"));
}

#[test]
fn test_scrolled_out_buttons_are_not_clickable() {
    let mut app = answered_app();
    for i in 0..5 {
        let query = app.session.submit_text(&format!("more {}", i)).unwrap();
        app.session
            .resolve(&query, Ok(crate::qna::AnswerRecord::no_answer()));
    }

    render_to_string(&mut app, 60, 14);

    assert!(app.regions.buttons().is_empty());
}

#[test]
fn test_scroll_offset_is_clamped_to_content() {
    let mut app = answered_app();
    app.scroll_offset = 50;

    render_to_string(&mut app, 60, 20);

    assert_eq!(app.max_scroll, 0);
    assert_eq!(app.scroll_offset, 0);
}
