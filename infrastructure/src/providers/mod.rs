//! Chat provider adapters
//!
//! | Provider | Endpoint | Roles | Auth |
//! |----------|----------|-------|------|
//! | [`OpenAiProvider`] | `/v1/chat/completions` | `user` / `assistant` | Bearer token |
//! | [`GeminiProvider`] | `/v1beta/models/{model}:generateContent` | `user` / `model` | `x-goog-api-key` |
//!
//! [`create_provider`] picks the adapter for the configured
//! [`ProviderKind`], resolves its credential and builds the HTTP client.

pub mod gemini;
mod http;
pub mod openai;
#[cfg(test)]
mod test_support;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use crate::credentials;
use crate::error::StartupError;
use jarvis_application::ChatProvider;
use jarvis_domain::{ProviderConfig, ProviderKind, SessionHistory};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Converts the session history into one provider's request messages.
///
/// Implementations must keep order and emit exactly one message per turn.
pub trait HistoryFormatter {
    type Message: Serialize;

    fn format_history(&self, history: &SessionHistory) -> Vec<Self::Message>;
}

/// Build the adapter for `config.default`.
///
/// Only the selected provider's API key is required.
pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn ChatProvider>, StartupError> {
    let client = http::build_client(config.request_timeout)?;

    let provider: Arc<dyn ChatProvider> = match config.default {
        ProviderKind::OpenAi => {
            let api_key = credentials::resolve_api_key(
                ProviderKind::OpenAi,
                &config.openai.api_key_env,
                config.openai.api_key.as_deref(),
            )?;
            let provider = OpenAiProvider::new(&config.openai, api_key, client);
            debug!(endpoint = provider.endpoint(), "OpenAI endpoint");
            Arc::new(provider)
        }
        ProviderKind::Gemini => {
            let api_key = credentials::resolve_api_key(
                ProviderKind::Gemini,
                &config.gemini.api_key_env,
                config.gemini.api_key.as_deref(),
            )?;
            let provider = GeminiProvider::new(&config.gemini, api_key, client);
            debug!(endpoint = provider.endpoint(), "Gemini endpoint");
            Arc::new(provider)
        }
    };

    info!(provider = %provider.kind(), model = %provider.model(), "Chat provider initialized");
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jarvis_domain::Turn;

    fn history(n: usize) -> SessionHistory {
        let mut history = SessionHistory::seeded(Turn::assistant("greeting"));
        for i in 0..n {
            history.push(Turn::user(format!("q{i}")));
            history.push(Turn::assistant(format!("a{i}")));
        }
        history
    }

    fn assert_one_message_per_turn<F: HistoryFormatter>(formatter: F) {
        for n in [0, 1, 4] {
            let history = history(n);
            assert_eq!(formatter.format_history(&history).len(), history.len());
        }
    }

    #[test]
    fn test_formatters_emit_one_message_per_turn() {
        assert_one_message_per_turn(openai::OpenAiFormatter);
        assert_one_message_per_turn(gemini::GeminiFormatter);
    }

    #[test]
    fn test_create_provider_with_configured_key() {
        let mut config = ProviderConfig::default();
        config.openai.api_key_env = "JARVIS_TEST_UNSET_OPENAI_KEY".to_string();
        config.openai.api_key = Some("sk-from-config".to_string());

        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
        assert_eq!(provider.model(), "gpt-3.5-turbo");
    }

    #[test]
    fn test_create_provider_missing_key_is_fatal() {
        let mut config = ProviderConfig::default();
        config.default = ProviderKind::Gemini;
        config.gemini.api_key_env = "JARVIS_TEST_UNSET_GEMINI_KEY".to_string();

        let err = create_provider(&config).err().unwrap();
        assert!(matches!(
            err,
            StartupError::MissingCredential { provider: ProviderKind::Gemini, .. }
        ));
    }
}
