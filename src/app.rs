//! Terminal application
//!
//! Owns the chat session for the lifetime of the process and presents it as
//! a scrolling message list with an input box and clickable suggestions.

mod app_state;
mod events;
mod mouse_click;
pub mod render;
pub mod reveal;
pub mod selection;

pub use app_state::App;
