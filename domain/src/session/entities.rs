//! Session domain entities

use super::history::SessionHistory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat turn (Entity)
///
/// Turns are immutable once created: fields are private and there are no
/// setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// One interactive chat session (Entity)
///
/// Owns its [`SessionHistory`] exclusively. A session is created when the
/// REPL (or a one-shot prompt) starts and dropped when it ends.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: String,
    history: SessionHistory,
}

impl ChatSession {
    /// Create a session with an empty history.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            history: SessionHistory::new(),
        }
    }

    /// Create a session whose history starts with an assistant greeting.
    pub fn with_greeting(id: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            history: SessionHistory::seeded(Turn::assistant(greeting)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn record(&mut self, turn: Turn) {
        self.history.push(turn);
    }
}
