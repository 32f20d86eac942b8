//! Presentation layer for jarvis-chat
//!
//! This crate contains the CLI definition, the console renderer, the
//! progress spinner, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::{Cli, ProviderArg};
pub use config::ReplConfig;
pub use output::console::{ConsoleFormatter, ConsoleRenderer};
pub use progress::reporter::ProgressReporter;
