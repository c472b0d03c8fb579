//! Chat-completion provider adapters.
//!
//! Each adapter implements the [`LlmGateway`] port over HTTP with `reqwest`.
//! Which one is used is decided by [`ProviderKind`]: taken from config when
//! set, otherwise inferred from the model family.

pub mod anthropic;
pub mod openai;

mod http;

pub use anthropic::AnthropicGateway;
pub use openai::OpenAiGateway;

use desk_domain::Model;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Anthropic,
    OpenAi,
}

impl ProviderKind {
    pub const VALID: [&'static str; 2] = ["anthropic", "openai"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAi => "openai",
        }
    }

    /// Infer the provider from the model family.
    ///
    /// GPT models go to OpenAI; Claude and unknown models go to Anthropic.
    pub fn for_model(model: &Model) -> Self {
        if model.is_gpt() {
            ProviderKind::OpenAi
        } else {
            ProviderKind::Anthropic
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            "openai" | "open-ai" | "gpt" => Ok(ProviderKind::OpenAi),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("anthropic".parse::<ProviderKind>(), Ok(ProviderKind::Anthropic));
        assert_eq!("OpenAI".parse::<ProviderKind>(), Ok(ProviderKind::OpenAi));
        assert!("bedrock".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_provider_kind_for_model() {
        assert_eq!(
            ProviderKind::for_model(&Model::Claude35Sonnet),
            ProviderKind::Anthropic
        );
        assert_eq!(ProviderKind::for_model(&Model::Gpt4o), ProviderKind::OpenAi);
        assert_eq!(
            ProviderKind::for_model(&Model::Custom("gpt-4.1-nano".to_string())),
            ProviderKind::OpenAi
        );
        assert_eq!(
            ProviderKind::for_model(&Model::Custom("local-llama".to_string())),
            ProviderKind::Anthropic
        );
    }
}
