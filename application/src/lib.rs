//! Application layer for jarvis-chat
//!
//! This crate contains the turn controller use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatBehavior;
pub use ports::{
    chat_provider::{ChatProvider, ProviderError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    renderer::ChatRenderer,
};
pub use use_cases::run_turn::{ResponseSource, TurnController, TurnOutcome};
