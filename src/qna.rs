//! Knowledge base client
//!
//! Builds requests for the remote question-answering endpoint and turns its
//! JSON responses into [`AnswerRecord`]s. Everything that can go wrong on the
//! wire is converted to a [`QnaError`] here; nothing propagates past this
//! boundary as a panic.

pub mod answer;
pub mod client;
pub mod error;
pub mod payload;
pub mod response;

pub use answer::{AnswerRecord, FOLLOW_UP_FALLBACK, NO_ANSWER_TEXT, Prompt, QnaId};
pub use client::{KnowledgeBase, QnaClient, Query};
pub use error::QnaError;
