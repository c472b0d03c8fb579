//! Infrastructure layer for policy-desk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod document;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig,
};
pub use document::{AutoExtractor, PdftotextExtractor, PlainTextExtractor};
pub use logging::JsonlConversationLogger;
pub use providers::{AnthropicGateway, OpenAiGateway, ProviderKind};
