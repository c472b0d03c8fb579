//! Document extractor port
//!
//! Turns a file on disk into the plain text of its pages. Format parsing is
//! left entirely to the adapter.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while extracting a document
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported document format: {0}")]
    Unsupported(String),

    #[error("Extraction tool failed: {0}")]
    ToolFailed(String),
}

/// Port for extracting page text from a document
///
/// Implementations are blocking; they run once per path because
/// [`DocumentStore`](crate::use_cases::document_store::DocumentStore)
/// memoizes the result.
pub trait DocumentExtractor: Send + Sync {
    /// Extract the text of every page, in page order
    fn extract(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}
