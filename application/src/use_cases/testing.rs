//! Test doubles shared by the use case tests.

use crate::ports::document_extractor::{DocumentExtractor, ExtractError};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, GatewayReply, LlmGateway};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Extractor that returns fixed pages and counts how often it ran
pub struct CountingExtractor {
    pages: Option<Vec<String>>,
    calls: AtomicUsize,
}

impl CountingExtractor {
    pub fn with_pages(pages: Vec<String>) -> Self {
        Self {
            pages: Some(pages),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn missing() -> Self {
        Self {
            pages: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DocumentExtractor for CountingExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .clone()
            .ok_or_else(|| ExtractError::NotFound(path.to_path_buf()))
    }
}

/// Scripted outcome for one gateway call
pub enum Scripted {
    Reply(GatewayReply),
    Error(GatewayError),
}

/// Gateway that replays scripted outcomes and records every request
pub struct ScriptedGateway {
    outcomes: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<CompletionRequest>>,
    delay: Option<Duration>,
}

impl ScriptedGateway {
    pub fn new(outcomes: Vec<Scripted>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<GatewayReply, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.outcomes.lock().unwrap().pop_front() {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Error(e)) => Err(e),
            None => Err(GatewayError::Other("no scripted outcome left".to_string())),
        }
    }
}
