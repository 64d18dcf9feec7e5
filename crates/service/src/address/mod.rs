//! Address queries: listing by language/tags with a capped count, and lookup by id.

pub mod repository;
pub mod service;

pub use service::AddressService;
