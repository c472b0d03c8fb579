//! Conversation session domain.
//!
//! - [`entities::Turn`]: a single user or assistant message
//! - [`entities::TurnMetadata`]: latency and token usage of an assistant turn
//! - [`transcript::SessionTranscript`]: append-only log of one session
//! - [`usage::UsageFieldPriority`]: ordered lookup of input-token fields
//! - [`response::TurnReport`]: what the presentation layer receives per turn

pub mod entities;
pub mod response;
pub mod transcript;
pub mod usage;
