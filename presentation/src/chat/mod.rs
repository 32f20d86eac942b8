//! Interactive chat module
//!
//! Provides a reedline-based interactive chat interface for J.A.R.V.I.S.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
