use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use super::reveal::RevealState;
use super::selection::SelectionState;
use crate::chat::{ChatSession, Role};
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::qna::{QnaError, Query};
use crate::worker::{WorkerRequest, WorkerResponse};

pub const INPUT_PLACEHOLDER: &str = "Send a message...";

/// Application state
pub struct App {
    pub session: ChatSession,
    pub textarea: TextArea<'static>,
    pub selection: SelectionState,
    pub reveal: RevealState,
    pub regions: LayoutRegions,
    /// Lines scrolled up from the bottom of the conversation
    pub scroll_offset: u16,
    /// Largest useful scroll offset, updated during rendering
    pub max_scroll: u16,
    /// Height of the message list, updated during rendering
    pub viewport_height: u16,
    pub title: String,
    pub should_quit: bool,
    request_tx: Option<Sender<WorkerRequest>>,
    response_rx: Option<Receiver<WorkerResponse>>,
    /// Incremented for each request, used to filter stale responses
    request_id: u64,
    in_flight_request_id: Option<u64>,
}

impl App {
    /// Create the application for a fresh session
    ///
    /// `reveal` is the command-line switch; the reveal effect runs only when
    /// both it and the config allow it.
    pub fn new(config: &Config, reveal: bool) -> Self {
        Self {
            session: ChatSession::new(),
            textarea: build_textarea(),
            selection: SelectionState::new(),
            reveal: RevealState::new(
                reveal && config.display.reveal,
                Duration::from_millis(config.display.reveal_delay_ms),
            ),
            regions: LayoutRegions::new(),
            scroll_offset: 0,
            max_scroll: 0,
            viewport_height: 0,
            title: config.title.clone(),
            should_quit: false,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<WorkerRequest>,
        response_rx: Receiver<WorkerResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a query is waiting for the knowledge base
    pub fn is_loading(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Whether the screen changes without user input (spinner or reveal)
    pub fn needs_frequent_redraw(&self) -> bool {
        self.is_loading() || self.reveal.is_active()
    }

    /// Current contents of the input box
    pub fn input_text(&self) -> String {
        self.textarea.lines().join(" ")
    }

    /// Submit the input box as a question
    ///
    /// The text stays in the input box if it cannot be sent yet.
    pub fn submit_input(&mut self) {
        if self.is_loading() {
            return;
        }

        let text = self.input_text();
        if let Some(query) = self.session.submit_text(&text) {
            self.textarea = build_textarea();
            self.send_query(query);
        }
    }

    /// Follow suggestion `suggestion_index` of message `message_index`
    pub fn activate_suggestion(&mut self, message_index: usize, suggestion_index: usize) {
        if self.is_loading() {
            return;
        }

        let Some(label) = self
            .session
            .conversation()
            .get(message_index)
            .and_then(|m| m.suggestions().get_index(suggestion_index))
            .map(|s| s.label.clone())
        else {
            return;
        };

        if let Some(query) = self.session.activate_suggestion(message_index, &label) {
            self.send_query(query);
        }
    }

    /// Message whose suggestions the keyboard shortcuts act on
    ///
    /// Only the newest message qualifies, once it is an assistant turn with
    /// suggestions that has been fully revealed.
    pub fn keyboard_target(&self) -> Option<usize> {
        let conversation = self.session.conversation();
        let index = conversation.len().checked_sub(1)?;
        let message = conversation.get(index)?;

        let has_buttons = message.role() == Role::Assistant && !message.suggestions().is_empty();
        (has_buttons && !self.reveal.is_revealing(index)).then_some(index)
    }

    /// Number of suggestions on the keyboard target
    pub fn keyboard_suggestion_count(&self) -> usize {
        self.keyboard_target()
            .and_then(|i| self.session.conversation().get(i))
            .map_or(0, |m| m.suggestions().len())
    }

    /// Follow the highlighted suggestion of the keyboard target
    pub fn activate_selected(&mut self) {
        if let Some(message_index) = self.keyboard_target()
            && let Some(suggestion_index) = self.selection.get_selected()
        {
            self.activate_suggestion(message_index, suggestion_index);
        }
    }

    fn send_query(&mut self, query: Query) {
        self.reveal.finish();
        self.selection.clear_selection();
        self.scroll_to_bottom();

        self.request_id += 1;
        let request_id = self.request_id;

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(WorkerRequest {
                query: query.clone(),
                request_id,
            })
            .is_ok()
        });

        if sent {
            self.in_flight_request_id = Some(request_id);
        } else {
            log::error!("Knowledge base worker is not running");
            self.session.resolve(
                &query,
                Err(QnaError::Transport(
                    "knowledge base worker is not running".to_string(),
                )),
            );
        }
    }

    /// Apply any answers that arrived from the worker thread
    pub fn poll_responses(&mut self, now: Instant) {
        loop {
            let received = match &self.response_rx {
                Some(rx) => rx.try_recv(),
                None => return,
            };

            match received {
                Ok(response) => self.handle_response(response, now),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    self.fail_in_flight();
                    return;
                }
            }
        }
    }

    fn handle_response(&mut self, response: WorkerResponse, now: Instant) {
        if self.in_flight_request_id != Some(response.request_id) {
            log::debug!("Dropping stale response {}", response.request_id);
            return;
        }

        self.in_flight_request_id = None;
        self.session.resolve(&response.query, response.outcome);
        self.on_new_turns(now);
    }

    fn fail_in_flight(&mut self) {
        if self.in_flight_request_id.take().is_none() {
            return;
        }

        if let Some(query) = self.session.pending_query().cloned() {
            log::error!("Knowledge base worker stopped with a query in flight");
            self.session.resolve(
                &query,
                Err(QnaError::Transport(
                    "knowledge base worker stopped".to_string(),
                )),
            );
        }
    }

    fn on_new_turns(&mut self, now: Instant) {
        let conversation = self.session.conversation();
        if let Some(index) = conversation.len().checked_sub(1)
            && let Some(message) = conversation.get(index)
            && message.role() == Role::Assistant
        {
            self.reveal.start(index, message.text(), now);
        }
        self.selection.clear_selection();
        self.scroll_to_bottom();
    }

    /// Advance time-based effects
    pub fn tick(&mut self, now: Instant) {
        self.reveal.advance(now);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(self.max_scroll);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }
}

fn build_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
