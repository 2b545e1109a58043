//! Answer records produced by the knowledge base client

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text shown when the knowledge base has no answer for a query
pub const NO_ANSWER_TEXT: &str = "No answer found.";

/// User turn shown for a follow-up whose answer carries no source question
pub const FOLLOW_UP_FALLBACK: &str = "Follow-up question";

/// Identifier of one question/answer pair inside the knowledge base
///
/// The service may use numbers or strings. The id is kept in whichever JSON
/// form it arrived in so it can be sent back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QnaId {
    Number(i64),
    Text(String),
}

impl fmt::Display for QnaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QnaId::Number(n) => write!(f, "{}", n),
            QnaId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for QnaId {
    fn from(value: &str) -> Self {
        QnaId::Text(value.to_string())
    }
}

impl From<i64> for QnaId {
    fn from(value: i64) -> Self {
        QnaId::Number(value)
    }
}

/// A follow-up prompt attached to an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub display_text: String,
    pub qna_id: QnaId,
}

impl Prompt {
    pub fn new(display_text: impl Into<String>, qna_id: impl Into<QnaId>) -> Self {
        Self {
            display_text: display_text.into(),
            qna_id: qna_id.into(),
        }
    }
}

/// The highest-ranked answer returned for one query
///
/// Transient: produced by the client and consumed right away by the chat
/// session.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    /// Answer text to show to the user
    pub text: String,
    /// Knowledge base questions this answer is filed under (may be empty)
    pub source_questions: Vec<String>,
    /// Follow-up prompts in the order the service listed them
    pub prompts: Vec<Prompt>,
    /// Confidence score reported by the service (0.0 - 1.0)
    pub confidence: f64,
    /// False for the "no answer found" sentinel
    pub matched: bool,
}

impl AnswerRecord {
    /// Sentinel record for a well-formed response with no answers
    pub fn no_answer() -> Self {
        Self {
            text: NO_ANSWER_TEXT.to_string(),
            source_questions: Vec::new(),
            prompts: Vec::new(),
            confidence: 0.0,
            matched: false,
        }
    }

    /// First knowledge base question this answer is filed under
    pub fn first_source_question(&self) -> Option<&str> {
        self.source_questions
            .iter()
            .map(|q| q.trim())
            .find(|q| !q.is_empty())
    }
}
