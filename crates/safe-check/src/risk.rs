//! Deterministic worst-case risk over all pairs of selected substances.
//!
//! ```text
//! ids ──► more than MAX_SUBSTANCE_IDS ? ──yes──► CheckError::TooManySubstances
//!            │ no
//!            ▼
//!      distinct < 2 ? ──yes──► unknown / "Insufficient substances selected"
//!            │ no
//!            ▼
//!      resolve names (catalog order, unknown ids dropped)
//!            │
//!            ▼
//!      pairs (i < j, input order) ──► one lookup per unordered pair
//!                                      (bounded concurrency, order kept)
//!            │
//!            ▼
//!      no matches ? ──yes──► unknown / "No interaction data available ..."
//!            │ no
//!            ▼
//!      running max from `low`, mechanisms "; ", notes " "
//! ```
//!
//! The level depends only on the set of ids. The joined text follows the
//! input order, and duplicate ids repeat their pairs' text.

use std::collections::{HashMap, HashSet};

use futures::stream::{self, StreamExt, TryStreamExt};
use safe_core::RiskLevel;
use safe_core::entities::InteractionRecord;
use safe_core::responses::MAX_SUBSTANCE_IDS;
use safe_core::store::ReferenceStore;

use crate::error::CheckError;

pub const INSUFFICIENT_MECHANISM: &str = "Insufficient substances selected";
pub const NO_DATA_MECHANISM: &str = "No interaction data available for this combination";
pub const NO_DATA_NOTES: &str =
    "This combination has not been studied or documented. Exercise extreme caution.";

/// Pair lookups in flight at once for a single check.
const LOOKUP_CONCURRENCY: usize = 8;

/// Output of [`compute_risk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub mechanism_summary: String,
    pub notes_summary: Option<String>,
    /// Display names of recognised substances, in catalog order.
    pub resolved_names: Vec<String>,
    /// Requested ids with no catalog entry, in input order, each once.
    pub unresolved_ids: Vec<String>,
}

impl RiskAssessment {
    fn insufficient() -> Self {
        Self {
            risk_level: RiskLevel::Unknown,
            mechanism_summary: INSUFFICIENT_MECHANISM.to_string(),
            notes_summary: None,
            resolved_names: Vec::new(),
            unresolved_ids: Vec::new(),
        }
    }
}

/// Compute the aggregated risk for `ids`.
///
/// # Errors
///
/// Returns [`CheckError::TooManySubstances`] for more than
/// [`MAX_SUBSTANCE_IDS`] ids, before any lookup, and [`CheckError::Store`]
/// if any lookup fails.
pub async fn compute_risk<S>(store: &S, ids: &[String]) -> Result<RiskAssessment, CheckError>
where
    S: ReferenceStore,
{
    if ids.len() > MAX_SUBSTANCE_IDS {
        return Err(CheckError::TooManySubstances {
            given: ids.len(),
            max: MAX_SUBSTANCE_IDS,
        });
    }

    let distinct: HashSet<&str> = ids.iter().map(String::as_str).collect();
    if distinct.len() < 2 {
        tracing::debug!(ids = ids.len(), "too few distinct substances");
        return Ok(RiskAssessment::insufficient());
    }

    let substances = store
        .resolve_substances(ids)
        .await
        .map_err(CheckError::store)?;
    let known: HashSet<&str> = substances.iter().map(|s| s.id.as_str()).collect();
    let mut seen = HashSet::new();
    let mut unresolved_ids = Vec::new();
    for id in ids {
        if !known.contains(id.as_str()) && seen.insert(id.as_str()) {
            unresolved_ids.push(id.clone());
        }
    }
    if !unresolved_ids.is_empty() {
        tracing::debug!(?unresolved_ids, "dropping unknown substance ids");
    }
    let resolved_names = substances.into_iter().map(|s| s.name).collect();

    let matches = lookup_pairs(store, ids).await?;

    let assessment = match aggregate(&matches) {
        Some((risk_level, mechanism_summary, notes_summary)) => RiskAssessment {
            risk_level,
            mechanism_summary,
            notes_summary: Some(notes_summary),
            resolved_names,
            unresolved_ids,
        },
        None => RiskAssessment {
            risk_level: RiskLevel::Unknown,
            mechanism_summary: NO_DATA_MECHANISM.to_string(),
            notes_summary: Some(NO_DATA_NOTES.to_string()),
            resolved_names,
            unresolved_ids,
        },
    };
    tracing::debug!(
        risk = %assessment.risk_level,
        pairs_matched = matches.len(),
        "risk computed"
    );
    Ok(assessment)
}

/// Every `(ids[i], ids[j])` with `i < j`, outer index ascending.
fn pairs(ids: &[String]) -> impl Iterator<Item = (&str, &str)> {
    ids.iter().enumerate().flat_map(move |(i, a)| {
        ids[i + 1..]
            .iter()
            .map(move |b| (a.as_str(), b.as_str()))
    })
}

/// Matched records for every pair of `ids`, in enumeration order.
///
/// Each unordered pair is queried once; duplicate ids reuse the answer.
async fn lookup_pairs<S>(store: &S, ids: &[String]) -> Result<Vec<InteractionRecord>, CheckError>
where
    S: ReferenceStore,
{
    let mut seen = HashSet::new();
    let unique: Vec<(&str, &str)> = pairs(ids)
        .filter(|&(a, b)| seen.insert(pair_key(a, b)))
        .collect();

    let lookups: Vec<_> = unique
        .into_iter()
        .map(|(a, b)| async move {
            let record = store.find_interaction(a, b).await?;
            Ok::<_, S::Error>((pair_key(a, b), record))
        })
        .collect();

    let found: HashMap<(&str, &str), Option<InteractionRecord>> = stream::iter(lookups)
        .buffered(LOOKUP_CONCURRENCY)
        .try_collect()
        .await
        .map_err(CheckError::store)?;

    Ok(pairs(ids)
        .filter_map(|(a, b)| found.get(&pair_key(a, b)).cloned().flatten())
        .collect())
}

fn pair_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Fold matched records into `(level, mechanisms, notes)`.
///
/// The running maximum starts at `low` and only moves on a strictly higher
/// rank. `None` when nothing matched.
fn aggregate(matches: &[InteractionRecord]) -> Option<(RiskLevel, String, String)> {
    if matches.is_empty() {
        return None;
    }
    let mut level = RiskLevel::Low;
    let mut mechanisms = Vec::with_capacity(matches.len());
    let mut notes = Vec::with_capacity(matches.len());
    for record in matches {
        if record.risk_level.rank() > level.rank() {
            level = record.risk_level;
        }
        mechanisms.push(record.mechanism.as_str());
        notes.push(record.notes.as_str());
    }
    Some((level, mechanisms.join("; "), notes.join(" ")))
}
