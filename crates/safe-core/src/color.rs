//! Display colors for risk levels.

use crate::enums::RiskLevel;

/// Gray used for `unknown` and anything that is not a defined risk level.
pub const NEUTRAL_COLOR: &str = "#6B7280";

/// Map a risk level name to its display color.
///
/// Matching is case-insensitive. Unmapped input, including the literal
/// `unknown`, falls back to [`NEUTRAL_COLOR`].
#[must_use]
pub fn risk_color(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "low" => "#10B981",
        "moderate" => "#F59E0B",
        "high" => "#EF4444",
        "avoid" => "#991B1B",
        _ => NEUTRAL_COLOR,
    }
}

impl RiskLevel {
    /// Display color for this level.
    #[must_use]
    pub fn color(self) -> &'static str {
        risk_color(self.as_str())
    }
}
