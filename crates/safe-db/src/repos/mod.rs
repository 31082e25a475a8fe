//! Repository modules for the four reference collections.
//!
//! Read methods are added to `SafeDb` via `impl SafeDb` blocks. Insert
//! helpers take a bare `libsql::Connection` so the seed can run them
//! inside a transaction.

pub mod advice;
pub mod interaction;
pub mod substance;
pub mod symptom;
