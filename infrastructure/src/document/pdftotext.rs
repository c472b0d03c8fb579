//! PDF extraction through the poppler `pdftotext` tool.

use super::split_pages;
use desk_application::{DocumentExtractor, ExtractError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

const TOOL: &str = "pdftotext";

/// Runs `pdftotext` and splits its output on form feed
#[derive(Debug, Clone)]
pub struct PdftotextExtractor {
    program: PathBuf,
}

impl PdftotextExtractor {
    /// Locate `pdftotext` on `PATH`
    pub fn discover() -> Option<Self> {
        which::which(TOOL).ok().map(|program| Self { program })
    }

    /// Use an explicit executable
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl DocumentExtractor for PdftotextExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        if !path.exists() {
            return Err(ExtractError::NotFound(path.to_path_buf()));
        }

        debug!("Running {} on {}", self.program.display(), path.display());
        let output = Command::new(&self.program)
            .args(["-q", "-enc", "UTF-8"])
            .arg(path)
            .arg("-")
            .output()
            .map_err(|e| {
                ExtractError::ToolFailed(format!("could not run {}: {}", self.program.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::ToolFailed(format!(
                "{} exited with {}: {}",
                TOOL,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }
}
