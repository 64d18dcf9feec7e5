pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod validation;
pub mod dto;
pub mod openapi;

pub use startup::run;
