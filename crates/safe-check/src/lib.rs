//! # safe-check
//!
//! The interaction check pipeline:
//!
//! - [`compute_risk`]: deterministic worst-case risk across all pairs
//! - [`compose_advisory`]: advice for the user's context plus emergency
//!   symptoms when the risk is severe
//! - [`ExplanationGenerator`]: prose from the text-generation service,
//!   downstream of the risk and never consulted by it
//! - [`CheckService`]: runs the three and assembles a
//!   [`safe_core::responses::CheckResult`]

pub mod advisory;
pub mod error;
pub mod explain;
pub mod pipeline;
pub mod risk;

#[cfg(test)]
mod test_support;

pub use advisory::{Advisory, compose_advisory};
pub use error::CheckError;
pub use explain::{Explainer, ExplanationGenerator, ExplanationRequest};
pub use pipeline::CheckService;
pub use risk::{RiskAssessment, compute_risk};
