//! Check pipeline error types.

use thiserror::Error;

/// Errors that abort a check.
///
/// Explanation failures never appear here; they degrade to fallback text.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The reference store failed during a lookup.
    #[error("reference store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// More ids than a single check accepts.
    #[error("too many substance ids: {given} given, at most {max} allowed")]
    TooManySubstances { given: usize, max: usize },
}

impl CheckError {
    pub(crate) fn store<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(error))
    }
}
