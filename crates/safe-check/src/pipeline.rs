//! The full check: risk first, then explanation and advisory side by side.

use std::sync::Arc;

use safe_core::responses::{CheckRequest, CheckResult};
use safe_core::store::ReferenceStore;

use crate::advisory::compose_advisory;
use crate::error::CheckError;
use crate::explain::{ExplanationGenerator, ExplanationRequest, Explainer};
use crate::risk::compute_risk;

/// Runs checks against a shared store with a given explainer.
pub struct CheckService<S, E = ExplanationGenerator> {
    store: Arc<S>,
    explainer: E,
}

impl<S, E> CheckService<S, E>
where
    S: ReferenceStore,
    E: Explainer,
{
    pub const fn new(store: Arc<S>, explainer: E) -> Self {
        Self { store, explainer }
    }

    #[must_use]
    pub const fn explainer(&self) -> &E {
        &self.explainer
    }

    /// Run one check.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::TooManySubstances`] for an oversized request and
    /// [`CheckError::Store`] if a store lookup fails. Explanation
    /// failures are absorbed into fallback text.
    pub async fn check(&self, request: &CheckRequest) -> Result<CheckResult, CheckError> {
        let risk = compute_risk(self.store.as_ref(), &request.substance_ids).await?;

        let explanation_request = ExplanationRequest {
            risk_level: risk.risk_level,
            mechanism: &risk.mechanism_summary,
            substances: &risk.resolved_names,
            already_taken: request.already_taken,
        };
        let (explanation, advisory) = tokio::join!(
            self.explainer.explain(&explanation_request),
            compose_advisory(self.store.as_ref(), risk.risk_level, request.already_taken),
        );
        let advisory = advisory?;

        tracing::info!(
            risk = %risk.risk_level,
            substances = request.substance_ids.len(),
            unresolved = risk.unresolved_ids.len(),
            already_taken = request.already_taken,
            "check complete"
        );

        Ok(CheckResult {
            risk_level: risk.risk_level,
            risk_color: risk.risk_level.color().to_string(),
            explanation,
            harm_advice: advisory.harm_advice,
            emergency_symptoms: advisory.emergency_symptoms,
            substances: risk.resolved_names,
            unresolved_ids: risk.unresolved_ids,
        })
    }
}
