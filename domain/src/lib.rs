//! Domain layer for jarvis-chat
//!
//! This crate contains the core conversation entities and persona data.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Session**: an explicit [`ChatSession`] owning an append-only
//!   [`SessionHistory`] of [`Turn`]s
//! - **Persona**: the [`CreatorProfile`] whose trigger phrases bypass the
//!   remote model with a fixed biography
//! - **Providers**: provider-neutral settings for the two completion APIs

pub mod core;
pub mod persona;
pub mod providers;
pub mod session;

// Re-export commonly used types
pub use core::error::DomainError;
pub use persona::profile::CreatorProfile;
pub use providers::{GeminiProviderConfig, OpenAiProviderConfig, ProviderConfig, ProviderKind};
pub use session::{
    entities::{ChatSession, Role, Turn},
    history::SessionHistory,
};
