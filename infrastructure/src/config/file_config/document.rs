//! Document configuration from TOML (`[document]` section)

use desk_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_EXCERPT_CHARS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DOCUMENT_PATH: &str = "HR.pdf";

/// Raw document configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDocumentConfig {
    /// Reference document answered from
    pub path: PathBuf,
    /// Leading characters of the document sent with each request
    pub excerpt_chars: usize,
}

impl Default for FileDocumentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

impl FileDocumentConfig {
    pub fn parse_excerpt_chars(&self) -> (usize, Vec<ConfigIssue>) {
        if self.excerpt_chars == 0 {
            let issue = ConfigIssue::warning(
                ConfigIssueCode::ZeroLimit {
                    field: "document.excerpt_chars".to_string(),
                },
                format!(
                    "document.excerpt_chars cannot be 0, using {}",
                    DEFAULT_EXCERPT_CHARS
                ),
            );
            return (DEFAULT_EXCERPT_CHARS, vec![issue]);
        }
        (self.excerpt_chars, vec![])
    }
}
