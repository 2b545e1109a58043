//! Conversation model and controller
//!
//! The session owns the ordered message history and turns user events
//! (submitted text, activated suggestions) into knowledge base queries.

pub mod message;
pub mod session;
pub mod suggestion;

pub use message::{Message, Role};
pub use session::{ChatSession, ConversationState};
pub use suggestion::{Suggestion, SuggestionSet, extract};
