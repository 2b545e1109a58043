//! Request bodies for the knowledge base query endpoint
//!
//! Two shapes share one endpoint: a free-text question and a lookup of a
//! specific answer by its id.

use serde::Serialize;

use super::answer::QnaId;

/// Number of answers requested for a free-text question
pub const QUESTION_TOP: u32 = 3;
/// Minimum confidence for an answer to be returned
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;
/// Minimum confidence for a precise answer span to be extracted
pub const ANSWER_SPAN_THRESHOLD: f64 = 0.5;
/// User identifier sent with id lookups
pub const DEFAULT_USER_ID: &str = "Default";

/// Body of a free-text question
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload<'a> {
    top: u32,
    question: &'a str,
    include_unstructured_sources: bool,
    confidence_score_threshold: f64,
    answer_span_request: AnswerSpanRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerSpanRequest {
    enable: bool,
    top_answers_with_span: u32,
    confidence_score_threshold: f64,
}

/// Body of a lookup by answer id
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdPayload<'a> {
    qna_id: &'a QnaId,
    top: u32,
    user_id: &'a str,
    is_test: bool,
}

/// Either request body, serialized without a wrapper
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload<'a> {
    Question(QuestionPayload<'a>),
    Id(IdPayload<'a>),
}

impl<'a> Payload<'a> {
    pub fn question(question: &'a str) -> Self {
        Payload::Question(QuestionPayload {
            top: QUESTION_TOP,
            question,
            include_unstructured_sources: true,
            confidence_score_threshold: CONFIDENCE_THRESHOLD,
            answer_span_request: AnswerSpanRequest {
                enable: true,
                top_answers_with_span: 1,
                confidence_score_threshold: ANSWER_SPAN_THRESHOLD,
            },
        })
    }

    pub fn by_id(qna_id: &'a QnaId) -> Self {
        Payload::Id(IdPayload {
            qna_id,
            top: 1,
            user_id: DEFAULT_USER_ID,
            is_test: false,
        })
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod payload_tests;
