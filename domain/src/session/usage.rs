//! Input-token accounting.
//!
//! Providers report the number of input tokens under different field names
//! (`input_tokens` for the Anthropic Messages API, `prompt_tokens` for
//! OpenAI-style chat completions, and so on across API versions).
//! [`UsageFieldPriority`] tries a configurable list of names in order and
//! yields [`InputTokens::Unavailable`] when none matches.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names checked when no list is configured, highest priority first
pub const DEFAULT_USAGE_FIELDS: &[&str] = &["input_tokens", "prompt_tokens"];

/// Input-token count of a model call
///
/// Serializes as a number, or `null` when unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InputTokens {
    Counted(u64),
    Unavailable,
}

impl InputTokens {
    pub fn count(&self) -> Option<u64> {
        match self {
            InputTokens::Counted(n) => Some(*n),
            InputTokens::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, InputTokens::Counted(_))
    }
}

impl std::fmt::Display for InputTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputTokens::Counted(n) => write!(f, "{}", n),
            InputTokens::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// Ordered list of usage field names (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageFieldPriority {
    fields: Vec<String>,
}

impl Default for UsageFieldPriority {
    fn default() -> Self {
        Self::new(DEFAULT_USAGE_FIELDS.iter().copied())
    }
}

impl UsageFieldPriority {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Resolve the input-token count from a raw usage object.
    ///
    /// The first field present with a non-negative integer value wins.
    /// Missing usage, a non-object value or no matching field all yield
    /// [`InputTokens::Unavailable`].
    pub fn resolve(&self, usage: Option<&Value>) -> InputTokens {
        let Some(Value::Object(map)) = usage else {
            return InputTokens::Unavailable;
        };

        self.fields
            .iter()
            .find_map(|field| map.get(field).and_then(Value::as_u64))
            .map(InputTokens::Counted)
            .unwrap_or(InputTokens::Unavailable)
    }
}
