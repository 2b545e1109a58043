//! Knowledge base worker thread
//!
//! Runs queries on a background thread so the terminal keeps redrawing while
//! a request is on the wire. The thread owns a single-threaded tokio runtime
//! and processes requests strictly one at a time, in arrival order.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use crate::qna::{AnswerRecord, KnowledgeBase, QnaError, Query};

/// Query sent to the worker thread
#[derive(Debug)]
pub struct WorkerRequest {
    pub query: Query,
    /// Unique ID for this request, used to filter stale responses
    pub request_id: u64,
}

/// Outcome of one query, sent back to the main thread
#[derive(Debug)]
pub struct WorkerResponse {
    pub request_id: u64,
    pub query: Query,
    pub outcome: Result<AnswerRecord, QnaError>,
}

/// Spawn the worker thread
///
/// The thread exits when the request channel is closed or the response
/// channel is dropped.
pub fn spawn_worker<K>(
    knowledge_base: K,
    request_rx: Receiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) -> io::Result<JoinHandle<()>>
where
    K: KnowledgeBase + Send + 'static,
{
    std::thread::Builder::new()
        .name("qna-worker".to_string())
        .spawn(move || worker_loop(knowledge_base, request_rx, response_tx))
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop<K: KnowledgeBase>(
    knowledge_base: K,
    request_rx: Receiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start worker runtime: {}", e);
            reject_all(&request_rx, &response_tx, &e.to_string());
            return;
        }
    };

    while let Ok(WorkerRequest { query, request_id }) = request_rx.recv() {
        log::debug!("Worker handling request {}: {:?}", request_id, query);
        let outcome = runtime.block_on(knowledge_base.query(&query));

        let response = WorkerResponse {
            request_id,
            query,
            outcome,
        };
        if response_tx.send(response).is_err() {
            // Main thread disconnected
            break;
        }
    }

    log::debug!("Knowledge base worker thread shutting down");
}

/// Answer every request with an error when no runtime could be built
fn reject_all(
    request_rx: &Receiver<WorkerRequest>,
    response_tx: &Sender<WorkerResponse>,
    reason: &str,
) {
    while let Ok(WorkerRequest { query, request_id }) = request_rx.recv() {
        let outcome = Err(QnaError::Transport(format!(
            "async runtime unavailable: {}",
            reason
        )));
        if response_tx
            .send(WorkerResponse {
                request_id,
                query,
                outcome,
            })
            .is_err()
        {
            return;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
