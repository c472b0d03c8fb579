//! Output format value object

use serde::{Deserialize, Serialize};

/// How a single-shot answer is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Reply followed by latency and token lines (default)
    #[default]
    Text,
    /// The turn report as JSON
    Json,
}
