//! Plain UTF-8 text documents.

use super::split_pages;
use desk_application::{DocumentExtractor, ExtractError};
use std::io::ErrorKind;
use std::path::Path;

/// Reads a UTF-8 text file; form feeds mark page boundaries
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl DocumentExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExtractError::NotFound(path.to_path_buf()),
            _ => ExtractError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Ok(split_pages(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.txt");
        std::fs::write(&path, "Vacation policy: \x0C15 days per year.").unwrap();

        let pages = PlainTextExtractor.extract(&path).unwrap();
        assert_eq!(pages, ["Vacation policy: ", "15 days per year."]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(matches!(
            PlainTextExtractor.extract(&path),
            Err(ExtractError::NotFound(p)) if p == path
        ));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            PlainTextExtractor.extract(&path),
            Err(ExtractError::Io { .. })
        ));
    }
}
