//! API key acquisition.
//!
//! The key comes from an environment variable, or from a masked prompt when
//! stdin is a terminal. Without either, start-up stops before any
//! conversation UI is shown.

use dialoguer::Password;
use secrecy::SecretString;
use std::io::IsTerminal;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("No API key available. Set {env_var} or run in a terminal to enter one.")]
    Missing { env_var: String },

    #[error("Could not read the API key: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Resolves the provider API key before the session starts
pub struct CredentialGate {
    env_var: String,
    interactive: bool,
}

impl CredentialGate {
    /// Gate reading `env_var`; prompting is allowed when stdin is a terminal
    pub fn new(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            interactive: std::io::stdin().is_terminal(),
        }
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// Obtain the key or fail with [`CredentialError::Missing`]
    pub fn resolve(&self) -> Result<SecretString, CredentialError> {
        self.resolve_from(std::env::var(&self.env_var).ok())
    }

    fn resolve_from(&self, env_value: Option<String>) -> Result<SecretString, CredentialError> {
        if let Some(key) = non_blank(env_value) {
            debug!("API key taken from {}", self.env_var);
            return Ok(SecretString::from(key));
        }

        if !self.interactive {
            return Err(self.missing());
        }

        let entered = Password::new()
            .with_prompt(format!("{} is not set. Enter API key", self.env_var))
            .allow_empty_password(true)
            .interact()?;

        non_blank(Some(entered))
            .map(SecretString::from)
            .ok_or_else(|| self.missing())
    }

    fn missing(&self) -> CredentialError {
        CredentialError::Missing {
            env_var: self.env_var.clone(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn gate() -> CredentialGate {
        CredentialGate::new("POLICY_DESK_TEST_KEY").with_interactive(false)
    }

    #[test]
    fn test_env_value_is_used() {
        let key = gate()
            .resolve_from(Some("  sk-test-not-real \n".to_string()))
            .unwrap();
        assert_eq!(key.expose_secret(), "sk-test-not-real");
    }

    #[test]
    fn test_missing_without_terminal() {
        let err = gate().resolve_from(None).unwrap_err();
        assert!(matches!(err, CredentialError::Missing { ref env_var } if env_var == "POLICY_DESK_TEST_KEY"));
        assert!(err.to_string().contains("POLICY_DESK_TEST_KEY"));
    }

    #[test]
    fn test_blank_env_value_counts_as_missing() {
        assert!(matches!(
            gate().resolve_from(Some("   ".to_string())),
            Err(CredentialError::Missing { .. })
        ));
    }
}
