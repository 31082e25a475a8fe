//! Read contract between the check pipeline and a reference data backend.
//!
//! `safe-db` implements this over libSQL. Tests substitute in-memory stores.

use std::future::Future;

use crate::entities::{HarmAdviceEntry, InteractionRecord, Substance, SymptomEntry};
use crate::enums::{AdviceContext, SymptomSeverity};

/// Read-only queries the aggregator and advisory composer need.
///
/// Every method returns rows in insertion order. Implementations must be
/// safe to call concurrently.
pub trait ReferenceStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Substances whose id is in `ids`, each at most once, in catalog order.
    /// Ids with no match are skipped.
    fn resolve_substances(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<Substance>, Self::Error>> + Send;

    /// First record (insertion order) for the pair `{a, b}` in either orientation.
    fn find_interaction(
        &self,
        a: &str,
        b: &str,
    ) -> impl Future<Output = Result<Option<InteractionRecord>, Self::Error>> + Send;

    /// Advice tagged with `context` or with `both`.
    fn advice_for_context(
        &self,
        context: AdviceContext,
    ) -> impl Future<Output = Result<Vec<HarmAdviceEntry>, Self::Error>> + Send;

    /// Symptoms whose severity is one of `severities`.
    fn symptoms_with_severity(
        &self,
        severities: &[SymptomSeverity],
    ) -> impl Future<Output = Result<Vec<SymptomEntry>, Self::Error>> + Send;
}
