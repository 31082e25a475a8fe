//! `ReferenceStore` implementation over libSQL.

use safe_core::entities::{HarmAdviceEntry, InteractionRecord, Substance, SymptomEntry};
use safe_core::store::ReferenceStore;
use safe_core::{AdviceContext, SymptomSeverity};

use crate::SafeDb;
use crate::error::DatabaseError;

impl ReferenceStore for SafeDb {
    type Error = DatabaseError;

    async fn resolve_substances(&self, ids: &[String]) -> Result<Vec<Substance>, Self::Error> {
        self.substances_by_ids(ids).await
    }

    async fn find_interaction(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Option<InteractionRecord>, Self::Error> {
        Self::find_interaction(self, a, b).await
    }

    async fn advice_for_context(
        &self,
        context: AdviceContext,
    ) -> Result<Vec<HarmAdviceEntry>, Self::Error> {
        Self::advice_for_context(self, context).await
    }

    async fn symptoms_with_severity(
        &self,
        severities: &[SymptomSeverity],
    ) -> Result<Vec<SymptomEntry>, Self::Error> {
        Self::symptoms_with_severity(self, severities).await
    }
}
