//! Shared building blocks for the admin backend: wire types used by more than
//! one crate and tracing subscriber setup.

pub mod types;
pub mod utils;
