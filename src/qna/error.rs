//! Knowledge base error types

use thiserror::Error;

/// Prefix of the assistant turn that reports a failed query
pub const ERROR_TURN_PREFIX: &str = "Request failed: ";

/// Errors that can occur while querying the knowledge base
///
/// A well-formed response with zero answers is not an error; the client turns
/// it into [`AnswerRecord::no_answer`](super::AnswerRecord::no_answer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QnaError {
    /// Connection, DNS or timeout failure
    #[error("Network error: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("Service error ({code}): {message}")]
    Status { code: u16, message: String },

    /// The response body did not have the expected JSON shape
    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

impl QnaError {
    /// Text for the assistant turn that reports this error
    pub fn user_message(&self) -> String {
        format!("{}{}", ERROR_TURN_PREFIX, self)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
