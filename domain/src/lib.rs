//! Domain layer for policy-desk
//!
//! This crate contains the conversation entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! A [`SessionTranscript`] is the append-only log of one session:
//!
//! - **Turns**: user and assistant messages in insertion order
//! - **Metadata**: latency and input-token count, one entry per assistant turn
//!
//! ## Document
//!
//! A [`Document`] is the extracted text of the reference file. Only a fixed
//! prefix of it (a [`DocumentExcerpt`]) is sent to the model on each call.

pub mod config;
pub mod core;
pub mod document;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, model::Model, question::Question};
pub use document::entities::{DEFAULT_EXCERPT_CHARS, Document, DocumentExcerpt};
pub use prompt::PromptTemplate;
pub use session::{
    entities::{Role, Turn, TurnMetadata},
    response::{ModelResponse, TurnReport},
    transcript::SessionTranscript,
    usage::{DEFAULT_USAGE_FIELDS, InputTokens, UsageFieldPriority},
};
