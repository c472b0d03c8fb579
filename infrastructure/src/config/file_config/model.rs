//! Model configuration from TOML (`[model]` section)

use desk_application::config::DEFAULT_MAX_TOKENS;
use desk_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Raw model configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier sent to the provider
    pub name: String,
    /// Output ceiling per call
    pub max_tokens: u32,
    /// Override for the built-in system instruction
    pub system_prompt: Option<String>,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: None,
        }
    }
}

impl FileModelConfig {
    /// Parse the model name, falling back to the default when empty
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        if self.name.trim().is_empty() {
            let issue = ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "model.name".to_string(),
                },
                format!("model.name is empty, using '{}'", Model::default()),
            );
            return (Model::default(), vec![issue]);
        }
        let Ok(model) = self.name.trim().parse::<Model>();
        (model, vec![])
    }

    pub fn parse_max_tokens(&self) -> (u32, Vec<ConfigIssue>) {
        if self.max_tokens == 0 {
            let issue = ConfigIssue::warning(
                ConfigIssueCode::ZeroLimit {
                    field: "model.max_tokens".to_string(),
                },
                format!("model.max_tokens cannot be 0, using {}", DEFAULT_MAX_TOKENS),
            );
            return (DEFAULT_MAX_TOKENS, vec![issue]);
        }
        (self.max_tokens, vec![])
    }
}
