//! Risk hierarchy, advice contexts, and symptom severity tiers.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Severity of a pairwise interaction, and of an aggregated check.
///
/// Variants are declared in ascending severity so the derived `Ord` follows
/// the hierarchy:
///
/// ```text
/// unknown(0) < low(1) < moderate(2) < high(3) < avoid(4)
/// ```
///
/// `Unknown` is never stored on an interaction record; it is the outcome of a
/// check that had too few substances or no matching data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Unknown,
    Low,
    Moderate,
    High,
    Avoid,
}

impl RiskLevel {
    /// Every level, in ascending severity.
    pub const ALL: [Self; 5] = [
        Self::Unknown,
        Self::Low,
        Self::Moderate,
        Self::High,
        Self::Avoid,
    ];

    /// Position in the risk hierarchy. `Unknown` ranks below everything.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Low => 1,
            Self::Moderate => 2,
            Self::High => 3,
            Self::Avoid => 4,
        }
    }

    /// Whether this level triggers the severe-risk advisory and emergency symptoms.
    #[must_use]
    pub const fn is_severe(self) -> bool {
        matches!(self, Self::High | Self::Avoid)
    }

    /// Parse a stored level case-insensitively, mapping anything unrecognised
    /// to `Unknown` (rank 0) instead of failing.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(Self::Unknown)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Avoid => "avoid",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            "avoid" => Ok(Self::Avoid),
            _ => Err(CoreError::InvalidValue {
                kind: "risk level",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// AdviceContext
// ---------------------------------------------------------------------------

/// When a harm-reduction tip applies.
///
/// `Both` entries are surfaced in either context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdviceContext {
    Planning,
    AlreadyTaken,
    Both,
}

impl AdviceContext {
    /// Context matching the request's `already_taken` flag.
    #[must_use]
    pub const fn for_flag(already_taken: bool) -> Self {
        if already_taken {
            Self::AlreadyTaken
        } else {
            Self::Planning
        }
    }

    /// Whether an entry tagged `self` should be shown in `context`.
    #[must_use]
    pub fn applies_to(self, context: Self) -> bool {
        self == Self::Both || self == context
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::AlreadyTaken => "already_taken",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for AdviceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdviceContext {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(Self::Planning),
            "already_taken" => Ok(Self::AlreadyTaken),
            "both" => Ok(Self::Both),
            _ => Err(CoreError::InvalidValue {
                kind: "advice context",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// SymptomSeverity
// ---------------------------------------------------------------------------

/// Tier of a symptom entry.
///
/// ```text
/// monitor < serious < emergency
/// ```
///
/// Independent of [`RiskLevel`]; only decides which symptoms are surfaced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SymptomSeverity {
    Monitor,
    Serious,
    Emergency,
}

impl SymptomSeverity {
    /// Tiers shown to users when the aggregated risk is severe.
    pub const SURFACED: [Self; 2] = [Self::Serious, Self::Emergency];

    #[must_use]
    pub fn is_surfaced(self) -> bool {
        Self::SURFACED.contains(&self)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monitor => "monitor",
            Self::Serious => "serious",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for SymptomSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymptomSeverity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monitor" => Ok(Self::Monitor),
            "serious" => Ok(Self::Serious),
            "emergency" => Ok(Self::Emergency),
            _ => Err(CoreError::InvalidValue {
                kind: "symptom severity",
                value: s.to_string(),
            }),
        }
    }
}
