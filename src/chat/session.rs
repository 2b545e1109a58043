//! Chat session controller
//!
//! Two events drive the session: the user submits text, or the user activates
//! a suggestion on an earlier assistant turn. Each event produces at most one
//! [`Query`]; [`ChatSession::resolve`] appends the resulting turns once the
//! knowledge base has answered. Only one query is pending at a time.

use super::message::{Message, Role};
use super::suggestion::{SuggestionSet, extract};
use crate::qna::{AnswerRecord, FOLLOW_UP_FALLBACK, KnowledgeBase, QnaError, Query};

/// Ordered, append-only message history for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    messages: Vec<Message>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Conversation state plus the query currently awaiting an answer
#[derive(Debug, Default)]
pub struct ChatSession {
    conversation: ConversationState,
    pending: Option<Query>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    /// Whether a query has been issued and not yet resolved
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_query(&self) -> Option<&Query> {
        self.pending.as_ref()
    }

    /// Handle submitted text
    ///
    /// Appends the user turn and returns the question to send. Blank text, or
    /// text submitted while another query is pending, is ignored.
    pub fn submit_text(&mut self, text: &str) -> Option<Query> {
        if self.is_pending() {
            log::debug!("Ignoring submission while a query is pending");
            return None;
        }

        let question = text.trim();
        if question.is_empty() {
            return None;
        }

        self.conversation.push(Message::user(question));
        Some(self.begin(Query::Text(question.to_string())))
    }

    /// Handle activation of the suggestion `label` on message `message_index`
    ///
    /// Returns the id lookup to send, or `None` if the message has no such
    /// suggestion or another query is pending.
    pub fn activate_suggestion(&mut self, message_index: usize, label: &str) -> Option<Query> {
        if self.is_pending() {
            log::debug!("Ignoring suggestion while a query is pending");
            return None;
        }

        let message = self.conversation.get(message_index)?;
        if message.role() != Role::Assistant {
            return None;
        }

        let id = message.suggestions().get(label)?.clone();
        log::debug!("Suggestion {:?} resolved to id {}", label, id);
        Some(self.begin(Query::ById(id)))
    }

    fn begin(&mut self, query: Query) -> Query {
        self.pending = Some(query.clone());
        query
    }

    /// Append the turns produced by the outcome of `query`
    ///
    /// - Errors become a single assistant turn describing the failure.
    /// - Text queries append the answer with its suggestions.
    /// - Id lookups without a match append a single fallback turn; otherwise
    ///   the answer's source question is shown as a user turn, followed by
    ///   the answer.
    pub fn resolve(&mut self, query: &Query, outcome: Result<AnswerRecord, QnaError>) {
        if self.pending.as_ref() != Some(query) {
            log::warn!("Resolving a query that was not pending: {:?}", query);
        }
        self.pending = None;

        let answer = match outcome {
            Ok(answer) => answer,
            Err(err) => {
                log::error!("Knowledge base query failed: {}", err);
                self.conversation.push(Message::error(err.user_message()));
                return;
            }
        };

        match query {
            Query::Text(_) => {
                let suggestions = extract(&answer);
                self.conversation
                    .push(Message::assistant(answer.text, suggestions));
            }
            Query::ById(_) if !answer.matched => {
                self.conversation
                    .push(Message::assistant(answer.text, SuggestionSet::new()));
            }
            Query::ById(_) => {
                let question = answer
                    .first_source_question()
                    .unwrap_or(FOLLOW_UP_FALLBACK)
                    .to_string();
                let suggestions = extract(&answer);
                self.conversation.push(Message::user(question));
                self.conversation
                    .push(Message::assistant(answer.text, suggestions));
            }
        }
    }

    /// Send `query` to `knowledge_base` and resolve it
    pub async fn dispatch<K: KnowledgeBase>(&mut self, knowledge_base: &K, query: Query) {
        let outcome = knowledge_base.query(&query).await;
        self.resolve(&query, outcome);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
