//! Context-appropriate harm-reduction advice and emergency symptoms.

use safe_core::entities::EmergencySymptom;
use safe_core::store::ReferenceStore;
use safe_core::{AdviceContext, RiskLevel, SymptomSeverity};

use crate::error::CheckError;

pub const SEVERE_ALREADY_TAKEN: &str =
    "Monitor your symptoms closely and stay with someone who can help if needed.";
pub const SEVERE_PLANNING: &str = "Consider avoiding this combination to reduce risk.";

/// Output of [`compose_advisory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub harm_advice: Vec<String>,
    /// `Some` exactly when the risk is severe; may then be empty.
    pub emergency_symptoms: Option<Vec<EmergencySymptom>>,
}

/// Build the advice list and, for `high`/`avoid`, the symptoms to watch for.
///
/// Severe risk puts one extra line in front of the stored advice.
///
/// # Errors
///
/// Returns [`CheckError::Store`] if a lookup fails.
pub async fn compose_advisory<S>(
    store: &S,
    risk_level: RiskLevel,
    already_taken: bool,
) -> Result<Advisory, CheckError>
where
    S: ReferenceStore,
{
    let context = AdviceContext::for_flag(already_taken);

    if !risk_level.is_severe() {
        let entries = store
            .advice_for_context(context)
            .await
            .map_err(CheckError::store)?;
        return Ok(Advisory {
            harm_advice: entries.into_iter().map(|e| e.advice).collect(),
            emergency_symptoms: None,
        });
    }

    let (entries, symptoms) = tokio::try_join!(
        async {
            store
                .advice_for_context(context)
                .await
                .map_err(CheckError::store)
        },
        async {
            store
                .symptoms_with_severity(&SymptomSeverity::SURFACED)
                .await
                .map_err(CheckError::store)
        },
    )?;

    let lead = if already_taken {
        SEVERE_ALREADY_TAKEN
    } else {
        SEVERE_PLANNING
    };
    let harm_advice = std::iter::once(lead.to_string())
        .chain(entries.into_iter().map(|e| e.advice))
        .collect();

    Ok(Advisory {
        harm_advice,
        emergency_symptoms: Some(symptoms.into_iter().map(EmergencySymptom::from).collect()),
    })
}
