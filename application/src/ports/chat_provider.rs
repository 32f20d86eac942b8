//! Chat provider port
//!
//! Defines the interface for sending a conversation to a hosted
//! chat-completion API.

use async_trait::async_trait;
use jarvis_domain::{ProviderKind, SessionHistory};
use thiserror::Error;

/// Errors that can occur during a completion call
///
/// Every variant carries the underlying cause as text. None of them are
/// fatal: the turn controller masks them with a fallback reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl ProviderError {
    /// `true` for 401/403, i.e. a bad or revoked API key.
    pub fn is_auth(&self) -> bool {
        matches!(self, ProviderError::Http { status: 401 | 403, .. })
    }

    /// `true` for 429, i.e. rate limit or quota exhaustion.
    pub fn is_quota(&self) -> bool {
        matches!(self, ProviderError::Http { status: 429, .. })
    }

    /// Short label recorded with failed turns in the transcript.
    pub fn category(&self) -> &'static str {
        match self {
            _ if self.is_auth() => "auth",
            _ if self.is_quota() => "quota",
            ProviderError::Http { .. } => "http",
            ProviderError::Connection(_) => "connection",
            ProviderError::MalformedResponse(_) => "malformed_response",
            ProviderError::Other(_) => "other",
        }
    }
}

/// Port for one hosted chat-completion API.
///
/// Implementations (adapters) live in the infrastructure layer. Each adapter
/// owns the conversion from [`SessionHistory`] into its wire shape, so adding
/// a provider means adding an adapter rather than touching the controller.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Which API this adapter talks to
    fn kind(&self) -> ProviderKind;

    /// Fixed model identifier sent with every request
    fn model(&self) -> &str;

    /// Send the whole history and return the first candidate's text.
    ///
    /// Issues exactly one request; there is no retry.
    async fn complete(&self, history: &SessionHistory) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ProviderError::Http {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 429: quota exceeded");
        assert!(err.is_quota());
        assert!(!err.is_auth());
    }

    #[test]
    fn test_auth_classification() {
        for status in [401, 403] {
            let err = ProviderError::Http {
                status,
                message: String::new(),
            };
            assert!(err.is_auth());
        }
        assert!(!ProviderError::Connection("reset".to_string()).is_auth());
    }

    #[test]
    fn test_category() {
        let http = |status| ProviderError::Http {
            status,
            message: String::new(),
        };
        assert_eq!(http(401).category(), "auth");
        assert_eq!(http(429).category(), "quota");
        assert_eq!(http(500).category(), "http");
        assert_eq!(
            ProviderError::MalformedResponse("eof".to_string()).category(),
            "malformed_response"
        );
        assert_eq!(ProviderError::Connection("reset".to_string()).category(), "connection");
    }
}
