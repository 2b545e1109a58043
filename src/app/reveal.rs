//! Incremental reveal of the newest assistant turn
//!
//! Purely cosmetic: the conversation always holds the full text, and the
//! renderer asks this state how much of it to show.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct ActiveReveal {
    message_index: usize,
    total_chars: usize,
    shown_chars: usize,
    started: Instant,
}

/// Character-by-character reveal of one message
#[derive(Debug, Clone)]
pub struct RevealState {
    enabled: bool,
    delay: Duration,
    active: Option<ActiveReveal>,
}

impl RevealState {
    /// `delay` is the time per revealed character; zero disables the effect
    pub fn new(enabled: bool, delay: Duration) -> Self {
        Self {
            enabled: enabled && !delay.is_zero(),
            delay,
            active: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Begin revealing `text` of message `message_index`
    pub fn start(&mut self, message_index: usize, text: &str, now: Instant) {
        if !self.enabled {
            return;
        }

        let total_chars = text.chars().count();
        self.active = (total_chars > 0).then_some(ActiveReveal {
            message_index,
            total_chars,
            shown_chars: 0,
            started: now,
        });
    }

    /// Advance the reveal to `now`, finishing it once every character shows
    pub fn advance(&mut self, now: Instant) {
        let Some(active) = &mut self.active else {
            return;
        };

        let elapsed = now.saturating_duration_since(active.started);
        let shown = (elapsed.as_nanos() / self.delay.as_nanos()) as usize;
        if shown >= active.total_chars {
            self.active = None;
        } else {
            active.shown_chars = shown;
        }
    }

    /// Show the full text immediately
    pub fn finish(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether message `message_index` is still being revealed
    pub fn is_revealing(&self, message_index: usize) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| a.message_index == message_index)
    }

    /// Portion of `text` to draw for message `message_index`
    pub fn visible_text<'a>(&self, message_index: usize, text: &'a str) -> &'a str {
        match &self.active {
            Some(active) if active.message_index == message_index => {
                let end = text
                    .char_indices()
                    .nth(active.shown_chars)
                    .map(|(i, _)| i)
                    .unwrap_or(text.len());
                &text[..end]
            }
            _ => text,
        }
    }
}

#[cfg(test)]
#[path = "reveal_tests.rs"]
mod reveal_tests;
