//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for single-shot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Reply followed by response time and input tokens
    Text,
    /// The turn report as JSON
    Json,
}

impl From<OutputFormat> for desk_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => desk_domain::OutputFormat::Text,
            OutputFormat::Json => desk_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for policy-desk
#[derive(Parser, Debug)]
#[command(name = "policy-desk")]
#[command(author, version, about = "Ask questions about an HR policy document")]
#[command(long_about = r#"
policy-desk answers questions about a single HR policy document.

The document is extracted once. Every question is sent to the model together
with the start of the document and the whole conversation so far.

Configuration files are loaded from (in priority order):
1. POLICY_DESK_* environment variables
2. --config <path>          Explicit config file
3. ./policy-desk.toml       Project-level config
4. ~/.config/policy-desk/config.toml   Global config

Example:
  policy-desk                                 # interactive chat about ./HR.pdf
  policy-desk -d handbook.pdf "How many vacation days do I get?"
  policy-desk -m gpt-4o --output json "What is the notice period?"
"#)]
pub struct Cli {
    /// Ask a single question and exit (starts interactive chat when omitted)
    pub question: Option<String>,

    /// Reference document to answer from
    #[arg(short, long, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Model that answers
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Provider to call ("anthropic" or "openai"); inferred from the model when unset
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Environment variable that holds the API key
    #[arg(long, value_name = "VAR")]
    pub api_key_env: Option<String>,

    /// Output format for single-shot answers
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write a JSONL log of the conversation to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
