//! Configuration file loading for policy-desk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `POLICY_DESK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./policy-desk.toml` or `./.policy-desk.toml`
//! 4. Global: `$XDG_CONFIG_HOME/policy-desk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_DOCUMENT_PATH, FileAnthropicConfig, FileConfig,
    FileDocumentConfig, FileLoggingConfig, FileModelConfig, FileOpenAiConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
