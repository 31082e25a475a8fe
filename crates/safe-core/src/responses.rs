//! Request and response shapes returned as JSON by the API and the `safeuse` CLI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::EmergencySymptom;
use crate::enums::RiskLevel;

/// Largest number of ids (duplicates included) a single check accepts.
pub const MAX_SUBSTANCE_IDS: usize = 100;

/// Body of `POST /api/check`.
///
/// Duplicate ids are tolerated. `already_taken` defaults to `false`.
/// At most [`MAX_SUBSTANCE_IDS`] ids are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckRequest {
    pub substance_ids: Vec<String>,
    #[serde(default)]
    pub already_taken: bool,
}

/// Response from `POST /api/check` and `safeuse check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckResult {
    pub risk_level: RiskLevel,
    pub risk_color: String,
    pub explanation: String,
    pub harm_advice: Vec<String>,
    /// `None` (serialized as `null`) unless the risk is high or avoid.
    pub emergency_symptoms: Option<Vec<EmergencySymptom>>,
    /// Display names of the substances that were recognised.
    pub substances: Vec<String>,
    /// Requested ids that matched no known substance.
    #[serde(default)]
    pub unresolved_ids: Vec<String>,
}

/// Row counts written by a seed run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedCounts {
    pub substances: u32,
    pub interactions: u32,
    pub harm_advice: u32,
    pub symptoms: u32,
}

/// Response from `POST /api/seed-data` and `safeuse seed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedResponse {
    pub message: String,
    pub counts: SeedCounts,
}

impl SeedResponse {
    #[must_use]
    pub fn seeded(counts: SeedCounts) -> Self {
        Self {
            message: "Database seeded successfully".to_string(),
            counts,
        }
    }
}
