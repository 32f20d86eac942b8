//! Shared HTTP plumbing for the provider adapters
//!
//! Both APIs take a JSON body and answer with JSON, and both wrap failures
//! in `{"error": {"message": ...}}`. This module turns every failure mode
//! into a [`ProviderError`] carrying a readable cause.

use crate::error::StartupError;
use jarvis_application::ProviderError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Build the HTTP client shared by an adapter.
pub(crate) fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, StartupError> {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        "jarvis-chat/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| StartupError::Initialization(format!("Failed to build HTTP client: {}", e)))
}

/// Error envelope used by both OpenAI and Gemini.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Extract the API's own error message from a failed response body.
///
/// Falls back to the raw body (or the status reason) when it is not the
/// usual envelope.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("Unknown").to_string()
    } else {
        trimmed.to_string()
    }
}

/// Send `body` as JSON and decode the success response as `R`.
pub(crate) async fn post_json<B, R>(
    request: reqwest::RequestBuilder,
    body: &B,
) -> Result<R, ProviderError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = request
        .json(body)
        .send()
        .await
        .map_err(|e| ProviderError::Connection(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ProviderError::Connection(format!("Failed to read response body: {}", e)))?;

    if !status.is_success() {
        debug!(status = status.as_u16(), body = %text, "Provider returned an error status");
        return Err(ProviderError::Http {
            status: status.as_u16(),
            message: error_message(status, &text),
        });
    }

    serde_json::from_str(&text).map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}
