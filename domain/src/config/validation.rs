//! Configuration validation issues.
//!
//! Loaders report problems as a list of [`ConfigIssue`]s rather than failing
//! on the first one, so every problem can be shown at start-up.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric limit that must be positive was zero.
    ZeroLimit { field: String },
    /// A required string was empty.
    EmptyValue { field: String },
    /// A value outside the accepted set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_constructor() {
        let issue = ConfigIssue::warning(
            ConfigIssueCode::ZeroLimit {
                field: "model.max_tokens".to_string(),
            },
            "model.max_tokens cannot be 0",
        );
        assert_eq!(issue.severity, Severity::Warning);
        assert!(!issue.is_error());
        assert_eq!(issue.message, "model.max_tokens cannot be 0");
    }
}
