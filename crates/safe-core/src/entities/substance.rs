use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A selectable substance. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Substance {
    /// Stable key used in check requests (e.g. `mdma`, `benzos`).
    pub id: String,
    pub name: String,
    /// Free-text category such as `stimulant` or `depressant`.
    pub drug_class: String,
    /// Street and brand names.
    #[serde(default)]
    pub common_names: Vec<String>,
}
