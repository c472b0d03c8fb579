//! Model value object representing a chat model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chat models known to the assistant (Value Object)
///
/// Identifiers are the exact strings the provider APIs expect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Claude models
    Claude35Sonnet,
    Claude35Haiku,
    ClaudeSonnet4,
    ClaudeSonnet45,
    ClaudeHaiku45,
    // GPT models
    Gpt4o,
    Gpt4oMini,
    Gpt41,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Claude35Sonnet => "claude-3-5-sonnet-20240620",
            Model::Claude35Haiku => "claude-3-5-haiku-20241022",
            Model::ClaudeSonnet4 => "claude-sonnet-4-20250514",
            Model::ClaudeSonnet45 => "claude-sonnet-4-5-20250929",
            Model::ClaudeHaiku45 => "claude-haiku-4-5-20251001",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a Claude model
    pub fn is_claude(&self) -> bool {
        match self {
            Model::Claude35Sonnet
            | Model::Claude35Haiku
            | Model::ClaudeSonnet4
            | Model::ClaudeSonnet45
            | Model::ClaudeHaiku45 => true,
            Model::Custom(s) => s.starts_with("claude"),
            _ => false,
        }
    }

    /// Check if this is a GPT model
    pub fn is_gpt(&self) -> bool {
        match self {
            Model::Gpt4o | Model::Gpt4oMini | Model::Gpt41 => true,
            Model::Custom(s) => s.starts_with("gpt-") || s.starts_with("o1") || s.starts_with("o3"),
            _ => false,
        }
    }
}

impl Default for Model {
    /// Returns the default model (Claude 3.5 Sonnet, June 2024)
    fn default() -> Self {
        Model::Claude35Sonnet
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-3-5-sonnet-20240620" => Model::Claude35Sonnet,
            "claude-3-5-haiku-20241022" => Model::Claude35Haiku,
            "claude-sonnet-4-20250514" => Model::ClaudeSonnet4,
            "claude-sonnet-4-5-20250929" => Model::ClaudeSonnet45,
            "claude-haiku-4-5-20251001" => Model::ClaudeHaiku45,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4.1" => Model::Gpt41,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse();
        Ok(model)
    }
}
