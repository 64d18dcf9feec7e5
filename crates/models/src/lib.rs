pub mod errors;
pub mod db;
pub mod language;
pub mod address;
pub mod system_prompt;

pub use language::Language;

#[cfg(test)]
mod tests;
