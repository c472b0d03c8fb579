//! OpenAI-compatible Chat Completions adapter.

mod client;
mod types;

pub use client::{DEFAULT_BASE_URL, OpenAiGateway};
