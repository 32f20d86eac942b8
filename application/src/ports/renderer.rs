//! Rendering host port
//!
//! Defines how the turn controller shows turns and error annotations.

use jarvis_domain::Turn;

/// Callback surface of the chat UI
///
/// Implementations live in the presentation layer (console, tests, ...).
pub trait ChatRenderer: Send + Sync {
    /// Display one turn, keyed by its role
    fn render_turn(&self, turn: &Turn);

    /// Display a visible error annotation
    fn render_error(&self, message: &str);

    /// Called before a provider request is issued.
    fn on_request_start(&self) {}

    /// Called after a provider request returned or failed.
    fn on_request_end(&self) {}
}
