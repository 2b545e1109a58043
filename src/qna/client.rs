//! HTTP client for the knowledge base query endpoint
//!
//! Both query shapes POST to the same URL with the same headers; they only
//! differ in the JSON body. [`QnaClient::send`] is the single request path.

use std::future::Future;

use reqwest::{Client, StatusCode};

use super::answer::{AnswerRecord, QnaId};
use super::error::QnaError;
use super::payload::Payload;
use super::response::parse_answer_body;
use crate::config::QnaSettings;

/// Header carrying the static subscription credential
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Maximum characters of an error body kept in [`QnaError::Status`]
const MAX_ERROR_BODY_CHARS: usize = 200;

/// One query against the knowledge base
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Free-text question typed by the user
    Text(String),
    /// Lookup of a specific answer, issued when a suggestion is activated
    ById(QnaId),
}

/// Anything that can answer a [`Query`]
///
/// Implemented by [`QnaClient`] for the real service; tests substitute
/// scripted implementations.
pub trait KnowledgeBase {
    fn query(&self, query: &Query) -> impl Future<Output = Result<AnswerRecord, QnaError>> + Send;
}

/// Client for the hosted knowledge base
#[derive(Debug, Clone)]
pub struct QnaClient {
    http: Client,
    settings: QnaSettings,
}

impl QnaClient {
    /// Create a client whose requests time out after `settings.timeout`
    pub fn new(settings: QnaSettings) -> Result<Self, QnaError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| QnaError::Transport(e.to_string()))?;
        Ok(Self::with_http_client(settings, http))
    }

    /// Create a client around an existing HTTP client
    pub fn with_http_client(settings: QnaSettings, http: Client) -> Self {
        Self { http, settings }
    }

    /// Ask a free-text question and return the highest-ranked answer
    pub async fn query_by_text(&self, question: &str) -> Result<AnswerRecord, QnaError> {
        self.send(&Payload::question(question)).await
    }

    /// Fetch the answer with the given id
    pub async fn query_by_id(&self, qna_id: &QnaId) -> Result<AnswerRecord, QnaError> {
        self.send(&Payload::by_id(qna_id)).await
    }

    async fn send(&self, payload: &Payload<'_>) -> Result<AnswerRecord, QnaError> {
        log::debug!("Sending knowledge base query: {:?}", payload);

        let response = self
            .http
            .post(&self.settings.base_url)
            .query(&[
                ("projectName", self.settings.project_name.as_str()),
                ("api-version", self.settings.api_version.as_str()),
                ("deploymentName", self.settings.deployment_name.as_str()),
            ])
            .header(SUBSCRIPTION_KEY_HEADER, &self.settings.subscription_key)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            log::debug!("Knowledge base returned {}: {}", status, body);
            return Err(QnaError::Status {
                code: status.as_u16(),
                message: summarize_error_body(status, &body),
            });
        }

        let record = parse_answer_body(&body)?;
        log::debug!(
            "Knowledge base answer (matched: {}, confidence: {:.2}, prompts: {})",
            record.matched,
            record.confidence,
            record.prompts.len()
        );
        Ok(record)
    }
}

impl KnowledgeBase for QnaClient {
    async fn query(&self, query: &Query) -> Result<AnswerRecord, QnaError> {
        match query {
            Query::Text(question) => self.query_by_text(question).await,
            Query::ById(qna_id) => self.query_by_id(qna_id).await,
        }
    }
}

fn transport_error(err: reqwest::Error) -> QnaError {
    if err.is_timeout() {
        QnaError::Transport("request timed out".to_string())
    } else {
        QnaError::Transport(err.to_string())
    }
}

/// Short, single-line description of an error response
fn summarize_error_body(status: StatusCode, body: &str) -> String {
    let condensed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if condensed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request was not successful")
            .to_string();
    }

    if condensed.chars().count() > MAX_ERROR_BODY_CHARS {
        let truncated: String = condensed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", truncated)
    } else {
        condensed
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
