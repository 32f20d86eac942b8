//! Run Turn use case.
//!
//! Processes one user submission end to end:
//!
//! ```text
//! append user turn → keyword match ─┬─ hit  → creator profile reply
//!                                   └─ miss → provider call ─┬─ ok  → model reply
//!                                                            └─ err → error annotation + fallback
//! → append assistant turn → render
//! ```
//!
//! The controller borrows the [`ChatSession`] mutably for the whole turn, so
//! a session can never have two turns in flight.

use crate::config::ChatBehavior;
use crate::ports::chat_provider::ChatProvider;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::renderer::ChatRenderer;
use jarvis_domain::{ChatSession, CreatorProfile, Turn};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where the assistant text of a turn came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    /// Keyword bypass: fixed creator biography, no network call.
    CreatorProfile,
    /// Text generated by the remote model.
    Provider,
    /// Provider call failed; the fallback literal was used.
    Fallback,
}

impl ResponseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseSource::CreatorProfile => "creator_profile",
            ResponseSource::Provider => "provider",
            ResponseSource::Fallback => "fallback",
        }
    }
}

/// Result of one processed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub source: ResponseSource,
    /// Assistant text (possibly empty if the model returned nothing).
    pub text: String,
    /// Annotation shown to the user when the provider failed.
    pub error: Option<String>,
}

/// Turn controller: orchestrates one submission at a time.
pub struct TurnController {
    provider: Arc<dyn ChatProvider>,
    profile: Arc<CreatorProfile>,
    behavior: ChatBehavior,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl TurnController {
    pub fn new(provider: Arc<dyn ChatProvider>, profile: Arc<CreatorProfile>) -> Self {
        Self {
            provider,
            profile,
            behavior: ChatBehavior::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_behavior(mut self, behavior: ChatBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn provider(&self) -> &dyn ChatProvider {
        self.provider.as_ref()
    }

    /// Process one user submission against `session`.
    ///
    /// The user turn is recorded before anything else, regardless of how the
    /// turn ends. Provider failures never escape: they are rendered as an
    /// error annotation and replaced by the fallback reply.
    pub async fn submit(
        &self,
        session: &mut ChatSession,
        input: &str,
        renderer: &dyn ChatRenderer,
    ) -> TurnOutcome {
        let user_turn = Turn::user(input);
        renderer.render_turn(&user_turn);
        session.record(user_turn);

        self.conversation_logger.log(ConversationEvent::new(
            "user_turn",
            json!({
                "session": session.id(),
                "text": input,
            }),
        ));

        let outcome = if self.profile.matches(input) {
            info!(session = %session.id(), "Creator keyword matched, bypassing provider");
            self.conversation_logger.log(ConversationEvent::new(
                "creator_bypass",
                json!({ "session": session.id() }),
            ));
            TurnOutcome {
                source: ResponseSource::CreatorProfile,
                text: self.profile.response_text(),
                error: None,
            }
        } else {
            self.ask_provider(session, renderer).await
        };

        // Empty replies are neither stored nor shown.
        if !outcome.text.is_empty() {
            let assistant_turn = Turn::assistant(outcome.text.clone());
            session.record(assistant_turn.clone());
            renderer.render_turn(&assistant_turn);
        } else {
            debug!(session = %session.id(), "Empty assistant reply, nothing recorded");
        }

        outcome
    }

    async fn ask_provider(&self, session: &ChatSession, renderer: &dyn ChatRenderer) -> TurnOutcome {
        debug!(
            provider = %self.provider.kind(),
            model = %self.provider.model(),
            turns = session.history().len(),
            "Sending history to provider"
        );

        renderer.on_request_start();
        let result = self.provider.complete(session.history()).await;
        renderer.on_request_end();

        match result {
            Ok(text) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "provider_response",
                    json!({
                        "session": session.id(),
                        "provider": self.provider.kind().as_str(),
                        "model": self.provider.model(),
                        "bytes": text.len(),
                        "text": text,
                    }),
                ));
                TurnOutcome {
                    source: ResponseSource::Provider,
                    text,
                    error: None,
                }
            }
            Err(e) => {
                warn!(
                    provider = %self.provider.kind(),
                    category = e.category(),
                    error = %e,
                    "Provider call failed"
                );
                self.conversation_logger.log(ConversationEvent::new(
                    "provider_error",
                    json!({
                        "session": session.id(),
                        "provider": self.provider.kind().as_str(),
                        "category": e.category(),
                        "error": e.to_string(),
                    }),
                ));

                let annotation = self.behavior.error_annotation(&e);
                renderer.render_error(&annotation);

                TurnOutcome {
                    source: ResponseSource::Fallback,
                    text: self.behavior.fallback_message.clone(),
                    error: Some(annotation),
                }
            }
        }
    }
}
