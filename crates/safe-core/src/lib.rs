//! # safe-core
//!
//! Core types shared across all SafeUse crates.
//!
//! This crate provides:
//! - Reference entities (substances, interaction records, harm advice, symptoms)
//! - The ordered risk hierarchy and the advice/symptom tier enums
//! - Request and response shapes for the `check` operation
//! - The risk-level to display-color mapping
//! - The [`store::ReferenceStore`] contract implemented by storage backends
//! - Cross-cutting error types

pub mod color;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod store;

pub use color::{NEUTRAL_COLOR, risk_color};
pub use enums::{AdviceContext, RiskLevel, SymptomSeverity};
pub use errors::CoreError;
