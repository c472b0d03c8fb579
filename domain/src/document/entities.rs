//! Document domain entities

use crate::core::error::DomainError;
use crate::core::string::char_prefix;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Number of leading characters of the document sent with every request
pub const DEFAULT_EXCERPT_CHARS: usize = 2000;

/// The extracted text of the reference document (Entity)
///
/// Identified by the path it was loaded from. Created once and shared
/// read-only for the rest of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    path: PathBuf,
    text: String,
    page_count: usize,
}

impl Document {
    /// Build a document from extracted pages.
    ///
    /// Page texts are concatenated with no separator. A page is readable when
    /// it contains any non-whitespace character; a document with no
    /// readable page is rejected.
    pub fn from_pages(path: impl Into<PathBuf>, pages: Vec<String>) -> Result<Self, DomainError> {
        let path = path.into();
        if !pages.iter().any(|p| !p.trim().is_empty()) {
            return Err(DomainError::EmptyDocument(path.display().to_string()));
        }

        let page_count = pages.len();
        Ok(Self {
            path,
            text: pages.concat(),
            page_count,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Length of the full text in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The first `max_chars` characters of the text
    pub fn excerpt(&self, max_chars: usize) -> DocumentExcerpt {
        DocumentExcerpt::of(&self.text, max_chars)
    }
}

/// Fixed-length prefix of a document (Value Object)
///
/// Everything after the cutoff is invisible to the model for that call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentExcerpt {
    text: String,
    truncated: bool,
}

impl DocumentExcerpt {
    pub fn of(text: &str, max_chars: usize) -> Self {
        let prefix = char_prefix(text, max_chars);
        Self {
            truncated: prefix.len() < text.len(),
            text: prefix.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether content was cut off
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
