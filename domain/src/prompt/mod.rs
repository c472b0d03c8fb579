//! Prompt domain
//!
//! The fixed system instruction and the synthetic message that carries the
//! document excerpt into every request.

mod template;

pub use template::PromptTemplate;
