//! Model response and per-turn report types.

use super::entities::TurnMetadata;
use super::usage::InputTokens;
use serde::Serialize;

/// A completed model call (Value Object)
///
/// Transient: consumed immediately to build an assistant turn and its
/// metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResponse {
    /// Reply text
    pub reply: String,
    /// Wall-clock seconds spent waiting on the endpoint
    pub elapsed_secs: f64,
    /// Input tokens, if the provider reported them
    pub input_tokens: InputTokens,
}

impl ModelResponse {
    pub fn metadata(&self) -> TurnMetadata {
        TurnMetadata::new(self.elapsed_secs, self.input_tokens)
    }
}

/// Outcome of one user turn as seen by the presentation layer
///
/// On failure `reply`, `elapsed_secs` and `input_tokens` are all absent and
/// `error` carries a message suitable for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    pub user_text: String,
    pub reply: Option<String>,
    pub elapsed_secs: Option<f64>,
    pub input_tokens: Option<InputTokens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TurnReport {
    pub fn success(user_text: impl Into<String>, response: &ModelResponse) -> Self {
        Self {
            user_text: user_text.into(),
            reply: Some(response.reply.clone()),
            elapsed_secs: Some(response.elapsed_secs),
            input_tokens: Some(response.input_tokens),
            error: None,
        }
    }

    pub fn failure(user_text: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            reply: None,
            elapsed_secs: None,
            input_tokens: None,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.reply.is_some()
    }

    /// The report as a plain tuple
    pub fn as_tuple(&self) -> (&str, Option<&str>, Option<f64>, Option<InputTokens>) {
        (
            &self.user_text,
            self.reply.as_deref(),
            self.elapsed_secs,
            self.input_tokens,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_report_tuple() {
        let response = ModelResponse {
            reply: "15 days per year".to_string(),
            elapsed_secs: 0.42,
            input_tokens: InputTokens::Counted(120),
        };
        let report = TurnReport::success("How many vacation days do I get?", &response);

        assert!(report.is_success());
        assert_eq!(
            report.as_tuple(),
            (
                "How many vacation days do I get?",
                Some("15 days per year"),
                Some(0.42),
                Some(InputTokens::Counted(120)),
            )
        );
        assert_eq!(response.metadata(), TurnMetadata::new(0.42, InputTokens::Counted(120)));
    }

    #[test]
    fn test_failure_report_has_no_result() {
        let report = TurnReport::failure("question", "network down");
        assert!(!report.is_success());
        assert_eq!(report.as_tuple(), ("question", None, None, None));
        assert_eq!(report.error.as_deref(), Some("network down"));
    }

    #[test]
    fn test_report_json_shape() {
        let report = TurnReport::failure("q", "boom");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["user_text"], "q");
        assert!(json["reply"].is_null());
        assert_eq!(json["error"], "boom");
    }
}
