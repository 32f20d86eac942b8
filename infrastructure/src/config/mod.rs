//! Configuration file loading for jarvis-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `JARVIS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./jarvis.toml` or `./.jarvis.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/jarvis/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileChatConfig, FileConfig, FileGeminiConfig, FileLoggingConfig, FileOpenAiConfig,
    FilePersonaConfig, FileProvidersConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
