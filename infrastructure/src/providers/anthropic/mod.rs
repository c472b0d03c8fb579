//! Anthropic Messages API adapter.

mod client;
mod types;

pub use client::{AnthropicGateway, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
