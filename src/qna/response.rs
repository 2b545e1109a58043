//! Response parsing for the knowledge base query endpoint
//!
//! Consumes the subset of the response that the chat needs:
//! ```text
//! { "answers": [ { "answer": "...", "confidenceScore": 0.9, "questions": ["..."],
//!                  "dialog": { "prompts": [ { "displayText": "...", "qnaId": 12 } ] } } ] }
//! ```
//! Missing fields fall back to defaults. A body that is not JSON, or whose
//! answer fields carry the wrong JSON types, is a
//! [`QnaError::MalformedResponse`]. Unusable prompts are skipped.

use serde::Deserialize;
use serde_json::Value;

use super::answer::{AnswerRecord, NO_ANSWER_TEXT, Prompt, QnaId};
use super::error::QnaError;

/// Id the service reports for its own "no good match" placeholder answer
const UNMATCHED_ANSWER_ID: i64 = -1;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryResponse {
    answers: Option<Vec<RawAnswer>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawAnswer {
    answer: Option<String>,
    #[serde(alias = "confidence")]
    confidence_score: Option<f64>,
    questions: Option<Vec<String>>,
    id: Option<QnaId>,
    dialog: Option<RawDialog>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDialog {
    prompts: Option<Vec<RawPrompt>>,
}

/// Prompt with untyped fields; an unusable prompt is skipped, not fatal
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawPrompt {
    display_text: Option<Value>,
    qna_id: Option<Value>,
}

/// Parse a response body into the highest-ranked answer
///
/// Returns [`AnswerRecord::no_answer`] when the answers list is empty or
/// missing.
pub fn parse_answer_body(body: &str) -> Result<AnswerRecord, QnaError> {
    let response: QueryResponse =
        serde_json::from_str(body).map_err(|e| QnaError::MalformedResponse(e.to_string()))?;

    let Some(first) = response.answers.unwrap_or_default().into_iter().next() else {
        return Ok(AnswerRecord::no_answer());
    };

    if first.id == Some(QnaId::Number(UNMATCHED_ANSWER_ID)) {
        log::debug!("Service returned its unmatched placeholder answer");
        return Ok(AnswerRecord::no_answer());
    }

    Ok(first.into_record())
}

impl RawAnswer {
    fn into_record(self) -> AnswerRecord {
        let text = self
            .answer
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| NO_ANSWER_TEXT.to_string());

        let prompts = self
            .dialog
            .and_then(|d| d.prompts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawPrompt::into_prompt)
            .collect();

        AnswerRecord {
            text,
            source_questions: self.questions.unwrap_or_default(),
            prompts,
            confidence: self.confidence_score.unwrap_or(0.0),
            matched: true,
        }
    }
}

impl RawPrompt {
    fn into_prompt(self) -> Option<Prompt> {
        let label = match &self.display_text {
            Some(Value::String(label)) if !label.trim().is_empty() => Some(label.clone()),
            _ => None,
        };
        let qna_id = self
            .qna_id
            .clone()
            .and_then(|id| serde_json::from_value::<QnaId>(id).ok());

        match (label, qna_id) {
            (Some(display_text), Some(qna_id)) => Some(Prompt {
                display_text,
                qna_id,
            }),
            _ => {
                log::warn!(
                    "Skipping unusable prompt (displayText: {:?}, qnaId: {:?})",
                    self.display_text,
                    self.qna_id
                );
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod response_tests;
