//! Conversation orchestration use case.
//!
//! One [`ConversationOrchestrator`] drives one user session: it validates
//! the question, asks the model with the document excerpt and the prior
//! turns, and records the exchange in the session transcript.
//!
//! # Turn lifecycle
//!
//! ```text
//! Idle --submit--> Pending --reply--> Idle   (user + assistant turn, metadata)
//!                          --error--> Idle   (user turn only)
//! ```
//!
//! A failed model call is not an error of `submit`: it comes back as a
//! [`TurnReport`] with no reply and a display message, and the session
//! stays usable.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::TurnProgressNotifier;
use crate::use_cases::model_client::ModelClient;
use desk_domain::core::string::truncate_for_log;
use desk_domain::{Document, Question, SessionTranscript, Turn, TurnReport};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Rejections of a submitted turn; nothing is recorded for these
#[derive(Error, Debug, PartialEq)]
pub enum ConversationError {
    #[error("Please enter a question.")]
    EmptyInput,
}

/// Whether a model call is outstanding for this session.
///
/// `submit` borrows the orchestrator mutably, so a session never has two
/// calls outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorState {
    Idle,
    Pending,
}

/// Resets the state to `Idle` however the call ends, including when the
/// `submit` future is dropped mid-call.
struct PendingGuard<'a> {
    state: &'a mut OrchestratorState,
}

impl<'a> PendingGuard<'a> {
    fn enter(state: &'a mut OrchestratorState) -> Self {
        *state = OrchestratorState::Pending;
        Self { state }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        *self.state = OrchestratorState::Idle;
    }
}

/// Drives a single session's question-and-answer loop
pub struct ConversationOrchestrator {
    client: ModelClient,
    document: Arc<Document>,
    transcript: SessionTranscript,
    state: OrchestratorState,
    logger: Arc<dyn ConversationLogger>,
}

impl ConversationOrchestrator {
    pub fn new(client: ModelClient, document: Arc<Document>) -> Self {
        Self {
            client,
            document,
            transcript: SessionTranscript::new(),
            state: OrchestratorState::Idle,
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Attach a structured conversation log and record the session start
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        logger.log(ConversationEvent::new(
            "session_start",
            json!({
                "document": self.document.path().display().to_string(),
                "pages": self.document.page_count(),
                "model": self.client.params().model.to_string(),
                "excerpt_chars": self.client.params().excerpt_chars,
            }),
        ));
        self.logger = logger;
        self
    }

    /// Answer one question.
    ///
    /// Empty or whitespace-only input is rejected before anything is
    /// recorded. Otherwise the user turn is always appended; the assistant
    /// turn and its metadata are appended only when the model call succeeds.
    pub async fn submit(
        &mut self,
        text: &str,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<TurnReport, ConversationError> {
        let question = Question::new(text).map_err(|_| ConversationError::EmptyInput)?;

        let excerpt = self.document.excerpt(self.client.params().excerpt_chars);
        let request =
            self.client
                .build_request(&excerpt, self.transcript.all(), question.content());
        debug!(
            "Question \"{}\": {} prior turns, excerpt {} chars{}",
            truncate_for_log(question.content(), 60),
            self.transcript.len(),
            excerpt.char_count(),
            if excerpt.is_truncated() { " (truncated)" } else { "" }
        );

        self.transcript.append(Turn::user(question.content()));
        self.logger.log(ConversationEvent::new(
            "user_turn",
            json!({ "content": question.content() }),
        ));

        progress.on_call_start(&request.model);
        let result = {
            let _pending = PendingGuard::enter(&mut self.state);
            self.client.send(&request).await
        };
        progress.on_call_end(result.is_ok());

        match result {
            Ok(response) => {
                self.transcript
                    .append_reply(response.reply.clone(), response.metadata());
                self.logger.log(ConversationEvent::new(
                    "assistant_turn",
                    json!({
                        "content": response.reply,
                        "elapsed_secs": response.elapsed_secs,
                        "input_tokens": response.input_tokens,
                    }),
                ));
                info!(
                    "Answered turn {} in {:.2}s",
                    self.transcript.assistant_turn_count(),
                    response.elapsed_secs
                );
                Ok(TurnReport::success(question.into_content(), &response))
            }
            Err(e) => {
                warn!("Turn left without a reply: {}", e);
                self.logger.log(ConversationEvent::new(
                    "model_call_failed",
                    json!({ "error": e.to_string() }),
                ));
                Ok(TurnReport::failure(question.into_content(), e.to_string()))
            }
        }
    }

    pub fn transcript(&self) -> &SessionTranscript {
        &self.transcript
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn client(&self) -> &ModelClient {
        &self.client
    }
}
