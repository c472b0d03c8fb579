//! Reference document domain.
//!
//! - [`entities::Document`]: the extracted text of the reference file
//! - [`entities::DocumentExcerpt`]: the fixed-length prefix sent to the model

pub mod entities;
