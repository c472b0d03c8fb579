//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: chat models the assistant can talk to
//! - [`question::Question`]: a validated user question
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: character-based prefix helpers

pub mod error;
pub mod model;
pub mod question;
pub mod string;
