//! Reference entities for SafeUse.
//!
//! Each entity maps to a table in the libSQL store (see `safe-db`'s
//! migrations). All structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! for JSON roundtrip and schema validation.

mod advice;
mod interaction;
mod substance;
mod symptom;

pub use advice::HarmAdviceEntry;
pub use interaction::InteractionRecord;
pub use substance::Substance;
pub use symptom::{EmergencySymptom, SymptomEntry};
