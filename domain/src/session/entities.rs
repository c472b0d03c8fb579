//! Session domain entities

use super::usage::InputTokens;
use serde::{Deserialize, Serialize};

/// Role of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in a conversation (Entity)
///
/// Immutable once created; the transcript hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// Timing and usage recorded for one assistant turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnMetadata {
    /// Wall-clock seconds spent in the model call
    pub elapsed_secs: f64,
    /// Input tokens the provider reported for the call
    pub input_tokens: InputTokens,
}

impl TurnMetadata {
    pub fn new(elapsed_secs: f64, input_tokens: InputTokens) -> Self {
        Self {
            elapsed_secs,
            input_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_constructors() {
        let user = Turn::user("hi");
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.content(), "hi");
        assert!(!user.is_assistant());

        let reply = Turn::assistant("hello");
        assert_eq!(reply.role(), Role::Assistant);
        assert!(reply.is_assistant());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_turn_serializes_role_and_content() {
        let json = serde_json::to_value(Turn::assistant("15 days")).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "15 days");
    }
}
