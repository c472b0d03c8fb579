//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod document;
mod logging;
mod model;
mod output;
mod provider;
mod repl;

pub use document::{DEFAULT_DOCUMENT_PATH, FileDocumentConfig};
pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use provider::{FileAnthropicConfig, FileOpenAiConfig, FileProviderConfig};
pub use repl::FileReplConfig;

use crate::providers::ProviderKind;
use desk_application::ConversationParams;
use desk_domain::{ConfigIssue, PromptTemplate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A configuration that cannot be used at all
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection and per-call limits
    pub model: FileModelConfig,
    /// Reference document settings
    pub document: FileDocumentConfig,
    /// Provider selection, endpoints and usage lookup
    pub provider: FileProviderConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Warnings have a usable fallback; errors do not.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let (model, model_issues) = self.model.parse_model();
        issues.extend(model_issues);
        issues.extend(self.model.parse_max_tokens().1);
        issues.extend(self.document.parse_excerpt_chars().1);
        issues.extend(self.provider.parse_kind(&model).1);
        issues.extend(self.provider.parse_usage_fields().1);
        issues.extend(self.provider.timeout_issues());
        issues
    }

    /// Validate and fail on error-level issues; warnings are returned
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|i| i.message).collect(),
            ))
        }
    }

    /// Per-call parameters, with invalid values replaced by defaults
    pub fn conversation_params(&self) -> ConversationParams {
        let system_prompt = self
            .model
            .system_prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(PromptTemplate::hr_expert_system());

        ConversationParams::default()
            .with_model(self.model.parse_model().0)
            .with_max_tokens(self.model.parse_max_tokens().0)
            .with_excerpt_chars(self.document.parse_excerpt_chars().0)
            .with_system_prompt(system_prompt)
            .with_usage_fields(self.provider.parse_usage_fields().0)
    }

    /// Provider to use for the configured model
    pub fn provider_kind(&self) -> ProviderKind {
        let model = self.model.parse_model().0;
        self.provider.parse_kind(&model).0
    }
}
