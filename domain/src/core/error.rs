//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown provider '{0}' (expected 'openai' or 'gemini')")]
    UnknownProvider(String),
}
