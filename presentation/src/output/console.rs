//! Console output formatter for conversation turns

use crate::config::OutputConfig;
use colored::Colorize;
use desk_domain::{Document, SessionTranscript, Turn, TurnMetadata, TurnReport};

/// Formats turns, transcripts and document details for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Apply output settings process-wide
    pub fn configure(config: &OutputConfig) {
        if !config.color {
            colored::control::set_override(false);
        }
    }

    /// Format the outcome of one submitted question
    pub fn format_report(report: &TurnReport) -> String {
        match (&report.reply, report.elapsed_secs, report.input_tokens) {
            (Some(reply), Some(secs), Some(tokens)) => {
                format!(
                    "{}\n\n{}\n",
                    reply,
                    Self::metadata_line(&TurnMetadata::new(secs, tokens))
                )
            }
            _ => format!(
                "{} {}\n",
                "Error:".red().bold(),
                report.error.as_deref().unwrap_or("the model did not answer")
            ),
        }
    }

    /// Format the report as pretty JSON
    pub fn format_json(report: &TurnReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Replay every turn of the transcript with its metadata
    pub fn format_transcript(transcript: &SessionTranscript) -> String {
        if transcript.is_empty() {
            return format!("{}\n", "No questions asked yet.".dimmed());
        }

        let mut output = String::new();
        for (turn, meta) in transcript.entries() {
            output.push_str(&Self::format_turn(turn, meta));
            output.push('\n');
        }
        output
    }

    /// Format one transcript entry
    pub fn format_turn(turn: &Turn, meta: Option<&TurnMetadata>) -> String {
        let mut output = if turn.is_assistant() {
            format!("{}\n{}\n", "Assistant:".green().bold(), turn.content())
        } else {
            format!("{} {}\n", "You:".cyan().bold(), turn.content())
        };
        if let Some(meta) = meta {
            output.push_str(&Self::metadata_line(meta));
            output.push('\n');
        }
        output
    }

    /// Summary of the loaded reference document
    pub fn format_document(document: &Document, excerpt_chars: usize) -> String {
        let excerpt = document.excerpt(excerpt_chars);
        let coverage = if excerpt.is_truncated() {
            format!(
                "first {} of {} characters",
                excerpt.char_count(),
                document.char_count()
            )
            .yellow()
            .to_string()
        } else {
            "the whole document".green().to_string()
        };

        format!(
            "{} {}\n{} {}\n{} {}\n{} {}\n",
            "Document:".cyan().bold(),
            document.path().display(),
            "Pages:".cyan().bold(),
            document.page_count(),
            "Characters:".cyan().bold(),
            document.char_count(),
            "Sent to model:".cyan().bold(),
            coverage
        )
    }

    fn metadata_line(meta: &TurnMetadata) -> String {
        format!(
            "{} {:.2}s  {} {}",
            "Response time:".dimmed(),
            meta.elapsed_secs,
            "Input tokens:".dimmed(),
            meta.input_tokens
        )
    }
}
