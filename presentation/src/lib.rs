//! Presentation layer for policy-desk
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, the credential prompt and the interactive chat
//! interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod credential;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use credential::{CredentialError, CredentialGate};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
