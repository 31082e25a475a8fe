use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AdviceContext;

/// A harm-reduction tip tagged with the context it applies to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HarmAdviceEntry {
    pub context: AdviceContext,
    pub advice: String,
}
