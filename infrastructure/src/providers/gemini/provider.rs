//! Gemini chat provider
//!
//! Implements the `ChatProvider` port over
//! `POST /v1beta/models/{model}:generateContent`, optionally with the
//! Google Search grounding tool attached.

use super::types::{
    GeminiFormatter, GenerateContentRequest, GenerateContentResponse, GoogleSearch, Tool,
};
use crate::providers::{HistoryFormatter, http};
use async_trait::async_trait;
use jarvis_application::{ChatProvider, ProviderError};
use jarvis_domain::{GeminiProviderConfig, ProviderKind, SessionHistory};
use tracing::debug;

pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    enable_search: bool,
}

impl GeminiProvider {
    pub fn new(config: &GeminiProviderConfig, api_key: String, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            model: config.model.clone(),
            enable_search: config.enable_search,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request(&self, history: &SessionHistory) -> GenerateContentRequest {
        let tools = if self.enable_search {
            vec![Tool {
                google_search: GoogleSearch::default(),
            }]
        } else {
            Vec::new()
        };

        GenerateContentRequest {
            contents: GeminiFormatter.format_history(history),
            tools,
        }
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, history: &SessionHistory) -> Result<String, ProviderError> {
        let request = self.build_request(history);

        debug!(
            model = %self.model,
            contents = request.contents.len(),
            search = self.enable_search,
            "Calling Gemini generateContent"
        );

        let response: GenerateContentResponse = http::post_json(
            self.client
                .post(&self.endpoint)
                .header("x-goog-api-key", &self.api_key),
            &request,
        )
        .await?;

        if let Some(reason) = response.block_reason() {
            return Err(ProviderError::Other(format!("Prompt blocked: {}", reason)));
        }

        response
            .first_text()
            .ok_or_else(|| ProviderError::MalformedResponse("No candidates in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::test_support::serve_once;
    use jarvis_domain::Turn;

    fn provider(enable_search: bool) -> GeminiProvider {
        provider_at("https://generativelanguage.googleapis.com/", enable_search)
    }

    fn provider_at(base_url: &str, enable_search: bool) -> GeminiProvider {
        let config = GeminiProviderConfig {
            enable_search,
            base_url: base_url.to_string(),
            ..Default::default()
        };
        GeminiProvider::new(&config, "test-key".to_string(), reqwest::Client::new())
    }

    async fn complete_against(status_line: &str, body: &str) -> (Result<String, ProviderError>, String) {
        let (base_url, server) = serve_once(status_line, body).await;
        let provider = provider_at(&base_url, true);
        let mut history = SessionHistory::seeded(Turn::assistant("Greetings."));
        history.push(Turn::user("news today?"));

        let result = provider.complete(&history).await;
        (result, server.await.unwrap())
    }

    #[test]
    fn test_endpoint_includes_model() {
        assert_eq!(
            provider(true).endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_search_tool_follows_config() {
        let history = SessionHistory::seeded(Turn::user("news today?"));

        let with_search = provider(true).build_request(&history);
        assert_eq!(with_search.tools.len(), 1);

        let without_search = provider(false).build_request(&history);
        assert!(without_search.tools.is_empty());
        assert_eq!(without_search.contents.len(), 1);
    }

    #[test]
    fn test_kind_and_model() {
        let provider = provider(false);
        assert_eq!(provider.kind(), ProviderKind::Gemini);
        assert_eq!(provider.model(), "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_success_joins_parts_and_sends_key() {
        let (result, request) = complete_against(
            "200 OK",
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Markets "},{"text":"rose."}]}}]}"#,
        )
        .await;

        assert_eq!(result.unwrap(), "Markets rose.");
        assert!(request.starts_with("post /v1beta/models/gemini-2.5-flash:generatecontent "));
        assert!(request.contains("x-goog-api-key: test-key"));
        assert!(request.contains(r#""role":"model""#));
        assert!(request.contains(r#""google_search":{}"#));
    }

    #[tokio::test]
    async fn test_invalid_key_is_auth_error() {
        let (result, _) = complete_against(
            "403 Forbidden",
            r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#,
        )
        .await;

        let err = result.unwrap_err();
        assert!(err.is_auth());
        assert_eq!(err.to_string(), "HTTP 403: API key not valid");
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_other_error() {
        let (result, _) =
            complete_against("200 OK", r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).await;
        assert_eq!(
            result.unwrap_err(),
            ProviderError::Other("Prompt blocked: SAFETY".to_string())
        );
    }

    #[tokio::test]
    async fn test_no_candidates_is_malformed() {
        let (result, _) = complete_against("200 OK", "{}").await;
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
    }
}
