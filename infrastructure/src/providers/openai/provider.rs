//! OpenAI chat provider
//!
//! Implements the `ChatProvider` port over `POST /v1/chat/completions`.
//! The API is stateless, so the full history is re-sent on every call.

use super::types::{ChatCompletionRequest, ChatCompletionResponse, OpenAiFormatter};
use crate::providers::{HistoryFormatter, http};
use async_trait::async_trait;
use jarvis_application::{ChatProvider, ProviderError};
use jarvis_domain::{OpenAiProviderConfig, ProviderKind, SessionHistory};
use tracing::debug;

pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: Option<u32>,
}

impl OpenAiProvider {
    pub fn new(config: &OpenAiProviderConfig, api_key: String, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key,
            endpoint: format!(
                "{}/v1/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request<'a>(&'a self, history: &SessionHistory) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: OpenAiFormatter.format_history(history),
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, history: &SessionHistory) -> Result<String, ProviderError> {
        let request = self.build_request(history);

        debug!(
            model = %self.model,
            messages = request.messages.len(),
            "Calling OpenAI chat completions"
        );

        let response: ChatCompletionResponse = http::post_json(
            self.client.post(&self.endpoint).bearer_auth(&self.api_key),
            &request,
        )
        .await?;

        response
            .first_text()
            .ok_or_else(|| ProviderError::MalformedResponse("No choices in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::test_support::serve_once;
    use jarvis_domain::Turn;

    fn provider(base_url: &str) -> OpenAiProvider {
        let config = OpenAiProviderConfig {
            base_url: base_url.to_string(),
            max_tokens: Some(256),
            ..Default::default()
        };
        OpenAiProvider::new(&config, "sk-test".to_string(), reqwest::Client::new())
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        assert_eq!(
            provider("https://api.openai.com/").endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            provider("http://localhost:1234").endpoint(),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[test]
    fn test_build_request_uses_configured_model() {
        let provider = provider("https://api.openai.com");
        let mut history = SessionHistory::seeded(Turn::assistant("hi"));
        history.push(Turn::user("hello"));

        let request = provider.build_request(&history);
        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.max_tokens, Some(256));
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
    }

    #[tokio::test]
    async fn test_connection_failure_is_provider_error() {
        // Nothing listens on port 9 (discard) on loopback in CI.
        let provider = provider("http://127.0.0.1:9");
        let history = SessionHistory::seeded(Turn::user("ping"));

        let err = provider.complete(&history).await.unwrap_err();
        assert!(matches!(err, ProviderError::Connection(_)));
    }

    async fn complete_against(status_line: &str, body: &str) -> (Result<String, ProviderError>, String) {
        let (base_url, server) = serve_once(status_line, body).await;
        let provider = provider(&base_url);
        let mut history = SessionHistory::seeded(Turn::assistant("Greetings."));
        history.push(Turn::user("weather?"));

        let result = provider.complete(&history).await;
        (result, server.await.unwrap())
    }

    #[tokio::test]
    async fn test_success_reply_and_request_shape() {
        let (result, request) = complete_against(
            "200 OK",
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"It is sunny."}}]}"#,
        )
        .await;

        assert_eq!(result.unwrap(), "It is sunny.");
        assert!(request.starts_with("post /v1/chat/completions "));
        assert!(request.contains("authorization: bearer sk-test"));
        assert!(request.contains(r#""role":"assistant","content":"greetings.""#));
        assert!(request.contains(r#""role":"user","content":"weather?""#));
    }

    #[tokio::test]
    async fn test_quota_status_is_http_error() {
        let (result, _) = complete_against(
            "429 Too Many Requests",
            r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota"}}"#,
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(
            err,
            ProviderError::Http {
                status: 429,
                message: "You exceeded your current quota".to_string(),
            }
        );
        assert!(err.is_quota());
    }

    #[tokio::test]
    async fn test_auth_status_is_http_error() {
        let (result, _) = complete_against(
            "401 Unauthorized",
            r#"{"error":{"message":"Incorrect API key provided"}}"#,
        )
        .await;

        assert!(result.unwrap_err().is_auth());
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let (result, _) = complete_against("200 OK", "<html>gateway</html>").await;
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_empty_choices_is_malformed() {
        let (result, _) = complete_against("200 OK", r#"{"choices":[]}"#).await;
        assert_eq!(
            result.unwrap_err(),
            ProviderError::MalformedResponse("No choices in response".to_string())
        );
    }
}
