//! Extractor that picks an adapter by file extension.

use super::{PdftotextExtractor, PlainTextExtractor};
use desk_application::{DocumentExtractor, ExtractError};
use std::path::Path;
use tracing::debug;

/// `.pdf` goes to `pdftotext`; `.txt`, `.text` and `.md` are read as plain text
#[derive(Debug, Clone, Default)]
pub struct AutoExtractor {
    pdf: Option<PdftotextExtractor>,
}

impl AutoExtractor {
    /// Build with whatever PDF tooling is installed
    pub fn discover() -> Self {
        let pdf = PdftotextExtractor::discover();
        match &pdf {
            Some(tool) => debug!("PDF extraction via {}", tool.program().display()),
            None => debug!("pdftotext not found on PATH; PDF documents unsupported"),
        }
        Self { pdf }
    }

    pub fn with_pdf(pdf: Option<PdftotextExtractor>) -> Self {
        Self { pdf }
    }
}

impl DocumentExtractor for AutoExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => match &self.pdf {
                Some(pdf) => pdf.extract(path),
                None if !path.exists() => Err(ExtractError::NotFound(path.to_path_buf())),
                None => Err(ExtractError::Unsupported(
                    "PDF documents need the `pdftotext` tool (poppler-utils) on PATH".to_string(),
                )),
            },
            "txt" | "text" | "md" => PlainTextExtractor.extract(path),
            other => Err(ExtractError::Unsupported(format!(
                "unknown file type '.{}' for {}",
                other,
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_files_use_plain_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("HR.TXT");
        std::fs::write(&path, "Vacation policy: 15 days per year.").unwrap();

        let pages = AutoExtractor::with_pdf(None).extract(&path).unwrap();
        assert_eq!(pages, ["Vacation policy: 15 days per year."]);
    }

    #[test]
    fn test_pdf_without_tool_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("HR.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        assert!(matches!(
            AutoExtractor::with_pdf(None).extract(&path),
            Err(ExtractError::Unsupported(_))
        ));
    }

    #[test]
    fn test_missing_pdf_is_not_found() {
        assert!(matches!(
            AutoExtractor::with_pdf(None).extract(Path::new("/nonexistent/HR.pdf")),
            Err(ExtractError::NotFound(_))
        ));
    }

    #[test]
    fn test_unknown_extension() {
        let err = AutoExtractor::with_pdf(None)
            .extract(Path::new("HR.docx"))
            .unwrap_err();
        assert!(err.to_string().contains(".docx"));
    }
}
