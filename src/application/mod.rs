//! Application layer: services and use cases
//!
//! This layer orchestrates the domain codec for the CLI.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::CodecService;
