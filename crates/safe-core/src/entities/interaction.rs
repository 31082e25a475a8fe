use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;

/// A documented interaction between two substances.
///
/// The pair is unordered: `(a, b)` and `(b, a)` describe the same interaction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InteractionRecord {
    pub substance_a: String,
    pub substance_b: String,
    pub risk_level: RiskLevel,
    pub mechanism: String,
    pub notes: String,
}

impl InteractionRecord {
    /// Whether this record describes the pair `{x, y}` in either orientation.
    #[must_use]
    pub fn matches_pair(&self, x: &str, y: &str) -> bool {
        (self.substance_a == x && self.substance_b == y)
            || (self.substance_a == y && self.substance_b == x)
    }
}
