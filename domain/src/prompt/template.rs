//! Prompt templates for grounded answers

use crate::document::entities::DocumentExcerpt;

/// Templates for the messages sent with every question
pub struct PromptTemplate;

impl PromptTemplate {
    /// Default system instruction
    pub fn hr_expert_system() -> &'static str {
        "You are an expert on the HR team. Answer the user's questions based on the provided PDF content."
    }

    /// The synthetic first user message carrying the document excerpt.
    ///
    /// The trailing marker is always present, even when the excerpt holds
    /// the whole document.
    pub fn document_preamble(excerpt: &DocumentExcerpt) -> String {
        format!(
            "Here is the content of the PDF: {}... [rest of the PDF omitted]",
            excerpt.text()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_preamble_format() {
        let excerpt = DocumentExcerpt::of("Vacation policy: 15 days per year.", 2000);
        let prompt = PromptTemplate::document_preamble(&excerpt);
        assert!(prompt.starts_with("Here is the content of the PDF: Vacation policy"));
        assert!(prompt.ends_with("... [rest of the PDF omitted]"));
    }

    #[test]
    fn test_preamble_contains_only_excerpt() {
        let excerpt = DocumentExcerpt::of("abcdefghij", 4);
        let prompt = PromptTemplate::document_preamble(&excerpt);
        assert!(prompt.contains("abcd..."));
        assert!(!prompt.contains("abcde"));
    }

    #[test]
    fn test_system_prompt_mentions_pdf() {
        assert!(PromptTemplate::hr_expert_system().contains("PDF"));
    }
}
