//! Conversation parameters applied to every model call.
//!
//! [`ConversationParams`] groups the values that stay fixed for the whole
//! session: which model to call, the output ceiling, the document cutoff,
//! the system instruction and the usage field lookup order.

use desk_domain::{DEFAULT_EXCERPT_CHARS, Model, PromptTemplate, UsageFieldPriority};
use serde::{Deserialize, Serialize};

/// Output ceiling per call, in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationParams {
    /// Model that answers every turn.
    pub model: Model,
    /// Maximum tokens the model may generate per reply.
    pub max_tokens: u32,
    /// Characters of the document sent with each request.
    pub excerpt_chars: usize,
    /// System instruction attached to each request.
    pub system_prompt: String,
    /// Usage field names tried in order for the input-token count.
    pub usage_fields: UsageFieldPriority,
}

impl Default for ConversationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            system_prompt: PromptTemplate::hr_expert_system().to_string(),
            usage_fields: UsageFieldPriority::default(),
        }
    }
}

impl ConversationParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_usage_fields(mut self, fields: UsageFieldPriority) -> Self {
        self.usage_fields = fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ConversationParams::default();
        assert_eq!(params.model, Model::Claude35Sonnet);
        assert_eq!(params.max_tokens, 1000);
        assert_eq!(params.excerpt_chars, 2000);
        assert_eq!(params.usage_fields, UsageFieldPriority::default());
    }

    #[test]
    fn test_builder_chain() {
        let params = ConversationParams::default()
            .with_model(Model::Gpt4oMini)
            .with_max_tokens(256)
            .with_excerpt_chars(50)
            .with_system_prompt("Be brief.")
            .with_usage_fields(UsageFieldPriority::new(["prompt_tokens"]));

        assert_eq!(params.model, Model::Gpt4oMini);
        assert_eq!(params.max_tokens, 256);
        assert_eq!(params.excerpt_chars, 50);
        assert_eq!(params.system_prompt, "Be brief.");
        assert_eq!(params.usage_fields.fields(), ["prompt_tokens".to_string()]);
    }
}
