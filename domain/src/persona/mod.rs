//! Assistant persona: who built it and which questions bypass the model.

pub mod profile;
