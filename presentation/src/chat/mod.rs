//! Interactive chat module
//!
//! Provides a line-editor based chat interface over one conversation.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
