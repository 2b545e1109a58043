//! Terminal chat front-end for a hosted question-answering knowledge base

pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod layout;
pub mod qna;
pub mod worker;

#[cfg(test)]
mod test_utils;
