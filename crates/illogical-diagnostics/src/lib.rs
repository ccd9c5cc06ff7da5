//! illogical diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! parser, the evaluator and the facade: structured error codes and the
//! top-level error type.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for illogical operations
pub type Result<T> = std::result::Result<T, IllogicalError>;
