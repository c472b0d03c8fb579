//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while the model is answering
    pub show_progress: bool,
    /// Path to history file (`~` is expanded)
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// History file path with a leading `~` expanded
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.as_deref().map(expand_home)
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_path_expands_home() {
        let config = FileReplConfig {
            history_file: Some("~/.local/share/policy-desk/history.txt".to_string()),
            ..Default::default()
        };
        let path = config.history_path().unwrap();
        if let Some(home) = dirs::home_dir() {
            assert!(path.starts_with(home));
        }
        assert!(path.ends_with(".local/share/policy-desk/history.txt"));
    }

    #[test]
    fn test_plain_history_path_unchanged() {
        let config = FileReplConfig {
            history_file: Some("history.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("history.txt")));
        assert_eq!(FileReplConfig::default().history_path(), None);
    }
}
