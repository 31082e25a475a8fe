//! Cross-cutting error types for SafeUse.
//!
//! Storage, HTTP, and pipeline errors live in their own crates. A unified
//! error only exists at the API boundary in `safe-server`.

use thiserror::Error;

/// Errors that can be raised by any SafeUse crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string could not be parsed into one of the closed enums.
    #[error("Invalid {kind}: '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    /// Data failed validation (dataset shape, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
