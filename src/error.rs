use thiserror::Error;

use crate::config::ConfigError;
use crate::qna::QnaError;

/// Errors that stop the program before the chat screen opens
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not create knowledge base client: {0}")]
    Client(#[from] QnaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
