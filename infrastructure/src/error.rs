//! Startup error types
//!
//! Everything here is fatal: the binary prints the message and exits before
//! any chat interaction happens.

use jarvis_domain::{DomainError, ProviderKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(
        "Configuration Error: {var} not found. Please set it in your .env file, \
         your environment, or as `api_key` under [providers.{provider}] in jarvis.toml."
    )]
    MissingCredential { provider: ProviderKind, var: String },

    #[error("Configuration Error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Configuration Error: {0}")]
    InvalidValue(#[from] DomainError),

    #[error("Initialization Error: {0}")]
    Initialization(String),
}

impl StartupError {
    /// `true` for problems the user fixes by editing configuration.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, StartupError::Initialization(_))
    }
}
