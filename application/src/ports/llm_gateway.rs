//! LLM Gateway port
//!
//! Defines the interface for communicating with chat-completion providers.

use async_trait::async_trait;
use desk_domain::{Model, Turn};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Rate limited by provider")]
    RateLimited,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One outbound chat-completion call
///
/// `messages` alternate between user and assistant in the order they are
/// sent; the system instruction travels separately.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub system: String,
    pub messages: Vec<Turn>,
    pub max_tokens: u32,
}

/// Raw reply from a provider
///
/// `usage` is the provider's usage object passed through unparsed, so the
/// caller decides which field holds the input-token count.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayReply {
    pub text: String,
    pub usage: Option<Value>,
    pub model: Option<String>,
}

impl GatewayReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
            model: None,
        }
    }

    pub fn with_usage(mut self, usage: Value) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to a provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Provider name for logs (e.g. "anthropic")
    fn name(&self) -> &str;

    /// Send one request and wait for the complete reply
    async fn complete(&self, request: &CompletionRequest) -> Result<GatewayReply, GatewayError>;
}
