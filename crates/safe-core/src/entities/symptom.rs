use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SymptomSeverity;

/// Symptom guidance: what to look for and what to do.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SymptomEntry {
    pub name: String,
    pub severity: SymptomSeverity,
    pub description: String,
    pub action: String,
}

/// A symptom as surfaced in a check result. The severity tier is dropped.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmergencySymptom {
    pub name: String,
    pub description: String,
    pub action: String,
}

impl From<SymptomEntry> for EmergencySymptom {
    fn from(entry: SymptomEntry) -> Self {
        Self {
            name: entry.name,
            description: entry.description,
            action: entry.action,
        }
    }
}
