//! In-memory reference store for unit tests.

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};

use safe_core::entities::{HarmAdviceEntry, InteractionRecord, Substance, SymptomEntry};
use safe_core::store::ReferenceStore;
use safe_core::{AdviceContext, RiskLevel, SymptomSeverity};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub substances: Vec<Substance>,
    pub interactions: Vec<InteractionRecord>,
    pub advice: Vec<HarmAdviceEntry>,
    pub symptoms: Vec<SymptomEntry>,
    /// Number of `find_interaction` calls served.
    pub lookups: AtomicUsize,
}

impl MemoryStore {
    pub fn substance(mut self, id: &str, name: &str) -> Self {
        self.substances.push(Substance {
            id: id.into(),
            name: name.into(),
            drug_class: "test".into(),
            common_names: Vec::new(),
        });
        self
    }

    pub fn interaction(mut self, a: &str, b: &str, level: RiskLevel, mechanism: &str) -> Self {
        self.interactions.push(InteractionRecord {
            substance_a: a.into(),
            substance_b: b.into(),
            risk_level: level,
            mechanism: mechanism.into(),
            notes: format!("{mechanism}."),
        });
        self
    }

    pub fn advice(mut self, context: AdviceContext, advice: &str) -> Self {
        self.advice.push(HarmAdviceEntry {
            context,
            advice: advice.into(),
        });
        self
    }

    pub fn symptom(mut self, name: &str, severity: SymptomSeverity) -> Self {
        self.symptoms.push(SymptomEntry {
            name: name.into(),
            severity,
            description: format!("{name} description"),
            action: format!("{name} action"),
        });
        self
    }
}

impl ReferenceStore for MemoryStore {
    type Error = Infallible;

    async fn resolve_substances(&self, ids: &[String]) -> Result<Vec<Substance>, Self::Error> {
        Ok(self
            .substances
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }

    async fn find_interaction(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Option<InteractionRecord>, Self::Error> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .interactions
            .iter()
            .find(|r| r.matches_pair(a, b))
            .cloned())
    }

    async fn advice_for_context(
        &self,
        context: AdviceContext,
    ) -> Result<Vec<HarmAdviceEntry>, Self::Error> {
        Ok(self
            .advice
            .iter()
            .filter(|e| e.context.applies_to(context))
            .cloned()
            .collect())
    }

    async fn symptoms_with_severity(
        &self,
        severities: &[SymptomSeverity],
    ) -> Result<Vec<SymptomEntry>, Self::Error> {
        Ok(self
            .symptoms
            .iter()
            .filter(|s| severities.contains(&s.severity))
            .cloned()
            .collect())
    }
}
