//! HTTP API for SafeUse.
//!
//! All routes are nested under `/api/`. Handlers share an [`ApiContext`]
//! holding the reference store and the check pipeline. CORS follows the
//! `server.cors_allow_origins` setting.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use router::router;
pub use types::ApiContext;
