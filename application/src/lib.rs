//! Application layer for policy-desk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ConversationParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    document_extractor::{DocumentExtractor, ExtractError},
    llm_gateway::{CompletionRequest, GatewayError, GatewayReply, LlmGateway},
    progress::{NoProgress, TurnProgressNotifier},
};
pub use use_cases::conversation::{ConversationError, ConversationOrchestrator, OrchestratorState};
pub use use_cases::document_store::{DocumentStore, LoadError};
pub use use_cases::model_client::{ModelCallError, ModelClient};
