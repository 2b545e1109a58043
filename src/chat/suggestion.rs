//! Follow-up suggestions derived from an answer
//!
//! A [`SuggestionSet`] is an ordered label -> id mapping. Labels are the
//! lookup keys, so each label appears at most once.

use crate::qna::{AnswerRecord, QnaId};

/// A clickable follow-up question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub id: QnaId,
}

/// Ordered follow-up suggestions with unique labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSet {
    entries: Vec<Suggestion>,
}

impl SuggestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a suggestion, returning the id it replaced
    ///
    /// A repeated label keeps its original position but takes the new id.
    pub fn insert(&mut self, label: impl Into<String>, id: QnaId) -> Option<QnaId> {
        let label = label.into();
        match self.entries.iter_mut().find(|s| s.label == label) {
            Some(existing) => Some(std::mem::replace(&mut existing.id, id)),
            None => {
                self.entries.push(Suggestion { label, id });
                None
            }
        }
    }

    /// Id behind a label
    pub fn get(&self, label: &str) -> Option<&QnaId> {
        self.entries.iter().find(|s| s.label == label).map(|s| &s.id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Suggestion> {
        self.entries.get(index)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the suggestion set for an answer's follow-up prompts
///
/// Prompts keep the service's order. If the service repeats a label the last
/// id wins, and the replaced id is logged.
pub fn extract(answer: &AnswerRecord) -> SuggestionSet {
    let mut set = SuggestionSet::new();
    for prompt in &answer.prompts {
        if let Some(replaced) = set.insert(prompt.display_text.clone(), prompt.qna_id.clone()) {
            log::warn!(
                "Duplicate suggestion label {:?}: id {} replaced by {}",
                prompt.display_text,
                replaced,
                prompt.qna_id
            );
        }
    }
    set
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
