//! Document store use case.
//!
//! Loads the reference document through a [`DocumentExtractor`] and caches
//! it by path for the rest of the process.
//!
//! # Threading
//!
//! The store is meant to be shared behind an `Arc` by every session in the
//! process. Lookups take a read lock; extraction runs with no lock held, so
//! two sessions loading the same path for the first time may both extract.
//! The first result inserted wins and both callers receive that same
//! `Arc<Document>`; later calls never extract again.

use crate::ports::document_extractor::{DocumentExtractor, ExtractError};
use desk_domain::{Document, DomainError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading the reference document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Document not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not extract {}: {source}", path.display())]
    Extraction {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },

    #[error("No readable pages in {}", .0.display())]
    NoReadablePages(PathBuf),
}

/// Process-wide cache of extracted documents, keyed by path
pub struct DocumentStore {
    extractor: Arc<dyn DocumentExtractor>,
    cache: RwLock<HashMap<PathBuf, Arc<Document>>>,
}

impl DocumentStore {
    pub fn new(extractor: Arc<dyn DocumentExtractor>) -> Self {
        Self {
            extractor,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Return the document at `path`, extracting it on first use.
    ///
    /// Failures are not cached and never retried here; a later call with
    /// the same path will attempt extraction again.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Arc<Document>, LoadError> {
        let path = path.as_ref();

        if let Some(doc) = self.cached(path) {
            debug!("Document cache hit: {}", path.display());
            return Ok(doc);
        }

        info!("Extracting document: {}", path.display());
        let pages = self.extractor.extract(path).map_err(|e| match e {
            ExtractError::NotFound(p) => LoadError::NotFound(p),
            source => LoadError::Extraction {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let doc = Document::from_pages(path, pages).map_err(|e| match e {
            DomainError::EmptyDocument(_) => LoadError::NoReadablePages(path.to_path_buf()),
            other => LoadError::Extraction {
                path: path.to_path_buf(),
                source: ExtractError::ToolFailed(other.to_string()),
            },
        })?;

        info!(
            "Loaded {} ({} pages, {} chars)",
            path.display(),
            doc.page_count(),
            doc.char_count()
        );

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let entry = cache
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(doc));
        Ok(Arc::clone(entry))
    }

    /// Whether `path` has already been loaded
    pub fn is_cached(&self, path: impl AsRef<Path>) -> bool {
        self.cached(path.as_ref()).is_some()
    }

    fn cached(&self, path: &Path) -> Option<Arc<Document>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }
}
