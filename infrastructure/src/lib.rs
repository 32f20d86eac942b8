//! Infrastructure layer for jarvis-chat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the two chat providers, configuration file loading,
//! credential resolution and the JSONL conversation logger.

pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileChatConfig, FileConfig, FileLoggingConfig, FilePersonaConfig,
    FileProvidersConfig, FileReplConfig,
};
pub use credentials::{load_dotenv, resolve_api_key};
pub use error::StartupError;
pub use logging::JsonlConversationLogger;
pub use providers::{GeminiProvider, HistoryFormatter, OpenAiProvider, create_provider};
