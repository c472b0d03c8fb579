//! Application-level configuration.
//!
//! - [`ConversationParams`]: fixed request parameters for every model call

pub mod conversation_params;

pub use conversation_params::{ConversationParams, DEFAULT_MAX_TOKENS};
