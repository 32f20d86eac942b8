//! Console output for chat turns

pub mod console;
