//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Diagnostic log file, in addition to stderr
    pub file: Option<PathBuf>,
    /// JSONL conversation log
    pub conversation_log: Option<PathBuf>,
}
