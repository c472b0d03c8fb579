//! Provider configuration from TOML (`[provider]` section)

use crate::providers::{ProviderKind, anthropic, openai};
use desk_domain::{
    ConfigIssue, ConfigIssueCode, DEFAULT_USAGE_FIELDS, Model, UsageFieldPriority,
};
use serde::{Deserialize, Serialize};

const DEFAULT_TIMEOUT_SECONDS: u64 = 300;

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
    /// Request timeout.
    pub timeout_seconds: u64,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            base_url: anthropic::DEFAULT_BASE_URL.to_string(),
            api_version: anthropic::DEFAULT_API_VERSION.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// OpenAI-compatible provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Base URL, including the version segment (can point at Azure or a local server).
    pub base_url: String,
    /// Request timeout.
    pub timeout_seconds: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: openai::DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// "anthropic" or "openai"; inferred from the model when unset.
    pub kind: Option<String>,
    /// Usage fields tried in order for the input-token count.
    pub usage_fields: Vec<String>,
    pub anthropic: FileAnthropicConfig,
    pub openai: FileOpenAiConfig,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            kind: None,
            usage_fields: DEFAULT_USAGE_FIELDS.iter().map(|s| s.to_string()).collect(),
            anthropic: FileAnthropicConfig::default(),
            openai: FileOpenAiConfig::default(),
        }
    }
}

impl FileProviderConfig {
    /// Resolve the provider, inferring it from the model family when unset
    /// or invalid.
    pub fn parse_kind(&self, model: &Model) -> (ProviderKind, Vec<ConfigIssue>) {
        let Some(raw) = self.kind.as_deref() else {
            return (ProviderKind::for_model(model), vec![]);
        };
        match raw.parse::<ProviderKind>() {
            Ok(kind) => (kind, vec![]),
            Err(_) => {
                let fallback = ProviderKind::for_model(model);
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "provider.kind".to_string(),
                        value: raw.to_string(),
                        valid_values: ProviderKind::VALID.iter().map(|s| s.to_string()).collect(),
                    },
                    format!(
                        "provider.kind: unknown value '{}', falling back to '{}'",
                        raw, fallback
                    ),
                );
                (fallback, vec![issue])
            }
        }
    }

    pub fn parse_usage_fields(&self) -> (UsageFieldPriority, Vec<ConfigIssue>) {
        let fields: Vec<&str> = self
            .usage_fields
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .collect();
        if fields.is_empty() {
            let issue = ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "provider.usage_fields".to_string(),
                },
                "provider.usage_fields is empty, using the default lookup order",
            );
            return (UsageFieldPriority::default(), vec![issue]);
        }
        (UsageFieldPriority::new(fields), vec![])
    }

    /// Timeouts of zero cannot work and are reported as errors
    pub fn timeout_issues(&self) -> Vec<ConfigIssue> {
        [
            ("provider.anthropic.timeout_seconds", self.anthropic.timeout_seconds),
            ("provider.openai.timeout_seconds", self.openai.timeout_seconds),
        ]
        .into_iter()
        .filter(|(_, secs)| *secs == 0)
        .map(|(field, _)| {
            ConfigIssue::error(
                ConfigIssueCode::ZeroLimit {
                    field: field.to_string(),
                },
                format!("{} cannot be 0", field),
            )
        })
        .collect()
    }
}
