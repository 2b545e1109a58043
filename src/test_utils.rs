#[cfg(test)]
pub mod test_helpers {
    use std::collections::VecDeque;
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use crate::app::App;
    use crate::config::Config;
    use crate::qna::{AnswerRecord, KnowledgeBase, Prompt, QnaError, Query};
    use crate::worker::spawn_worker;

    /// Knowledge base that replays scripted outcomes and records every query
    #[derive(Clone, Default)]
    pub struct ScriptedKnowledgeBase {
        outcomes: Arc<Mutex<VecDeque<Result<AnswerRecord, QnaError>>>>,
        calls: Arc<Mutex<Vec<Query>>>,
    }

    impl ScriptedKnowledgeBase {
        pub fn new(outcomes: Vec<Result<AnswerRecord, QnaError>>) -> Self {
            Self {
                outcomes: Arc::new(Mutex::new(outcomes.into())),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn calls(&self) -> Vec<Query> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl KnowledgeBase for ScriptedKnowledgeBase {
        async fn query(&self, query: &Query) -> Result<AnswerRecord, QnaError> {
            self.calls.lock().unwrap().push(query.clone());
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(AnswerRecord::no_answer()))
        }
    }

    pub fn answer(text: &str, questions: &[&str], prompts: &[(&str, &str)]) -> AnswerRecord {
        AnswerRecord {
            text: text.to_string(),
            source_questions: questions.iter().map(|q| q.to_string()).collect(),
            prompts: prompts
                .iter()
                .map(|(label, id)| Prompt::new(*label, *id))
                .collect(),
            confidence: 0.9,
            matched: true,
        }
    }

    /// Answer from the "What is an Archetype?" walkthrough
    pub fn archetype_answer() -> AnswerRecord {
        answer(
            "An archetype is...",
            &["archetype"],
            &[("Tell me more", "q123")],
        )
    }

    /// Answer returned when the "Tell me more" suggestion is followed
    pub fn archetype_follow_up() -> AnswerRecord {
        answer("Archetypes grant...", &["What is an archetype?"], &[])
    }

    pub fn test_config() -> Config {
        let mut config = Config::default();
        config.display.reveal = false;
        config
    }

    /// App wired to a real worker thread backed by `knowledge_base`
    pub fn app_with_knowledge_base(knowledge_base: ScriptedKnowledgeBase) -> App {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(knowledge_base, request_rx, response_tx).unwrap();

        let mut app = App::new(&test_config(), false);
        app.set_channels(request_tx, response_rx);
        app
    }

    /// Poll the app until no query is in flight
    ///
    /// Returns true if the query completed, false on timeout.
    pub fn wait_for_answer(app: &mut App, timeout_ms: u64) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.poll_responses(Instant::now());
            if !app.is_loading() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }

        false
    }
}
