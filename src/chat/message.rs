//! Chat message records

use super::suggestion::SuggestionSet;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Heading shown above the message
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

/// One turn of the conversation
///
/// Messages are immutable once created; the conversation only ever appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    text: String,
    suggestions: SuggestionSet,
    is_error: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            suggestions: SuggestionSet::new(),
            is_error: false,
        }
    }

    pub fn assistant(text: impl Into<String>, suggestions: SuggestionSet) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            suggestions,
            is_error: false,
        }
    }

    /// Assistant turn reporting a failed query
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            suggestions: SuggestionSet::new(),
            is_error: true,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Follow-up suggestions (always empty for user turns)
    pub fn suggestions(&self) -> &SuggestionSet {
        &self.suggestions
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}
