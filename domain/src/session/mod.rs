//! Chat session domain.
//!
//! - [`entities::Turn`] — a single user or assistant message
//! - [`history::SessionHistory`] — the append-only message store
//! - [`entities::ChatSession`] — a session owning its history

pub mod entities;
pub mod history;
