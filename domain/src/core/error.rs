//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Document {0} has no readable text")]
    EmptyDocument(String),

    #[error("Metadata can only follow an assistant turn")]
    UnalignedMetadata,
}
