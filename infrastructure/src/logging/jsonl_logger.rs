//! Append-only JSONL audit trail of a conversation.
//!
//! Every event becomes one line: the event payload's fields plus `type` and
//! an RFC 3339 `timestamp`. Payloads that are not JSON objects are kept
//! under `data`.

use chrono::{SecondsFormat, Utc};
use desk_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Conversation log backed by a file opened in append mode.
///
/// Several sessions may share one file. Each record is written through a
/// line-buffered writer, so a line reaches the file as soon as it is logged.
pub struct JsonlConversationLogger {
    file: Mutex<LineWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open the log at `path`, creating it and its parent directories.
    ///
    /// Returns `None` when the file cannot be opened; the conversation then
    /// runs without a log.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match Self::open(path) {
            Ok(file) => Some(Self {
                file: Mutex::new(LineWriter::new(file)),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("Conversation log disabled, cannot open {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(path: &Path) -> std::io::Result<File> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    }

    fn record(event: ConversationEvent) -> Value {
        let mut fields = match event.payload {
            Value::Object(map) => map,
            other => Map::from_iter([("data".to_string(), other)]),
        };
        fields.insert("type".to_string(), event.event_type.into());
        fields.insert(
            "timestamp".to_string(),
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true).into(),
        );
        Value::Object(fields)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let event_type = event.event_type;
        let line = Self::record(event).to_string();

        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(file, "{line}") {
            warn!("Dropped {} record for {}: {}", event_type, self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("conversation.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "user_turn",
            serde_json::json!({ "content": "How many vacation days do I get?" }),
        ));
        logger.log(ConversationEvent::new(
            "assistant_turn",
            serde_json::json!({
                "content": "15 days per year",
                "elapsed_secs": 0.42,
                "input_tokens": 120
            }),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        for record in &records {
            assert!(record.get("timestamp").is_some());
        }
        assert_eq!(records[0]["type"], "user_turn");
        assert_eq!(records[0]["content"], "How many vacation days do I get?");
        assert_eq!(records[1]["type"], "assistant_turn");
        assert_eq!(records[1]["input_tokens"], 120);
    }

    #[test]
    fn test_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conversation.jsonl");

        for n in 0..2 {
            let logger = JsonlConversationLogger::new(&path).unwrap();
            logger.log(ConversationEvent::new(
                "session_start",
                serde_json::json!({ "n": n }),
            ));
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["n"], 1);
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conversation.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "model_call_failed",
            serde_json::json!("network unreachable"),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "model_call_failed");
        assert_eq!(records[0]["data"], "network unreachable");
    }

    #[test]
    fn test_record_is_on_disk_while_logger_is_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conversation.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "user_turn",
            serde_json::json!({ "content": "Is remote work allowed?" }),
        ));

        let records = read_lines(logger.path());
        assert_eq!(records.len(), 1);
        let timestamp = records[0]["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_unwritable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        assert!(JsonlConversationLogger::new(blocker.join("conversation.jsonl")).is_none());
    }
}
