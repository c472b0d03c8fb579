//! Document extraction adapters.
//!
//! Implement the [`DocumentExtractor`](desk_application::DocumentExtractor)
//! port. Every adapter yields one string per page; pages are separated by
//! form feed (`\x0C`) in both plain-text files and `pdftotext` output.

mod auto;
mod pdftotext;
mod plain_text;

pub use auto::AutoExtractor;
pub use pdftotext::PdftotextExtractor;
pub use plain_text::PlainTextExtractor;

const PAGE_BREAK: char = '\x0C';

/// Split extracted text into pages on form feed.
///
/// A single trailing form feed ends the last page rather than opening an
/// empty one.
pub(crate) fn split_pages(text: &str) -> Vec<String> {
    let text = text.strip_suffix(PAGE_BREAK).unwrap_or(text);
    text.split(PAGE_BREAK).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages() {
        assert_eq!(split_pages("one\x0Ctwo\x0C"), ["one", "two"]);
        assert_eq!(split_pages("single page"), ["single page"]);
        assert_eq!(split_pages("a\x0C\x0Cb"), ["a", "", "b"]);
        assert_eq!(split_pages(""), [""]);
    }
}
