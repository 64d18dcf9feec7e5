//! Service layer for the admin backend.
//! - Query services own input normalization and error wrapping.
//! - Storage is reached only through the repository traits, so tests can
//!   swap in the hand-written mocks under `*::repository::mock`.

pub mod errors;
pub mod pagination;
pub mod address;
pub mod prompt;
#[cfg(test)]
pub mod test_support;
