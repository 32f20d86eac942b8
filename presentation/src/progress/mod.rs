//! Progress indicators shown while a provider request is in flight

pub mod reporter;
