//! System prompt lookups, one row per prompt kind and language.

pub mod repository;
pub mod service;

pub use service::PromptService;
