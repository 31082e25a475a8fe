//! Destructive seed of the reference collections.
//!
//! The bundled dataset is embedded at compile time. Seeding deletes every
//! row from all four tables and re-inserts the dataset inside a single
//! transaction, so a failure leaves the previous contents in place.
//! Callers must not run two seeds concurrently.

use std::collections::HashSet;

use serde::Deserialize;

use safe_core::entities::{HarmAdviceEntry, InteractionRecord, Substance, SymptomEntry};
use safe_core::responses::SeedCounts;

use crate::SafeDb;
use crate::error::DatabaseError;
use crate::repos::advice::insert_advice;
use crate::repos::interaction::insert_interaction;
use crate::repos::substance::insert_substance;
use crate::repos::symptom::insert_symptom;

const REFERENCE_DATA: &str = include_str!("../seed/reference_data.json");

/// A complete set of reference rows.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceDataset {
    pub substances: Vec<Substance>,
    pub interactions: Vec<InteractionRecord>,
    pub harm_advice: Vec<HarmAdviceEntry>,
    pub symptoms: Vec<SymptomEntry>,
}

impl ReferenceDataset {
    /// The dataset shipped with SafeUse.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidDataset` if the embedded JSON is malformed.
    pub fn builtin() -> Result<Self, DatabaseError> {
        let dataset: Self = serde_json::from_str(REFERENCE_DATA)
            .map_err(|e| DatabaseError::InvalidDataset(format!("reference_data.json: {e}")))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check that substance ids are unique and every interaction refers to
    /// known substances. Duplicate interaction records are allowed.
    pub fn validate(&self) -> Result<(), DatabaseError> {
        let mut ids = HashSet::new();
        for substance in &self.substances {
            if !ids.insert(substance.id.as_str()) {
                return Err(DatabaseError::InvalidDataset(format!(
                    "duplicate substance id '{}'",
                    substance.id
                )));
            }
        }
        for record in &self.interactions {
            for id in [&record.substance_a, &record.substance_b] {
                if !ids.contains(id.as_str()) {
                    return Err(DatabaseError::InvalidDataset(format!(
                        "interaction {}/{} refers to unknown substance '{id}'",
                        record.substance_a, record.substance_b
                    )));
                }
            }
        }
        Ok(())
    }

    /// Row counts this dataset produces when seeded.
    #[must_use]
    pub fn counts(&self) -> SeedCounts {
        SeedCounts {
            substances: count(self.substances.len()),
            interactions: count(self.interactions.len()),
            harm_advice: count(self.harm_advice.len()),
            symptoms: count(self.symptoms.len()),
        }
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl SafeDb {
    /// Replace all reference data with the bundled dataset.
    pub async fn seed_reference_data(&self) -> Result<SeedCounts, DatabaseError> {
        let dataset = ReferenceDataset::builtin()?;
        self.seed_with(&dataset).await
    }

    /// Replace all reference data with `dataset`.
    pub async fn seed_with(&self, dataset: &ReferenceDataset) -> Result<SeedCounts, DatabaseError> {
        dataset.validate()?;

        let tx = self.conn.transaction().await?;
        let written = write_dataset(&tx, dataset).await;
        match written {
            Ok(()) => tx.commit().await?,
            Err(error) => {
                tracing::error!(%error, "seed failed, rolling back");
                tx.rollback().await?;
                return Err(error);
            }
        }

        let counts = dataset.counts();
        tracing::info!(
            substances = counts.substances,
            interactions = counts.interactions,
            harm_advice = counts.harm_advice,
            symptoms = counts.symptoms,
            "reference data seeded"
        );
        Ok(counts)
    }

    /// Current row counts of the four reference tables.
    pub async fn counts(&self) -> Result<SeedCounts, DatabaseError> {
        Ok(SeedCounts {
            substances: self.count_rows("substances").await?,
            interactions: self.count_rows("interactions").await?,
            harm_advice: self.count_rows("harm_advice").await?,
            symptoms: self.count_rows("symptoms").await?,
        })
    }

    async fn count_rows(&self, table: &str) -> Result<u32, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let n = row.get::<i64>(0)?;
        u32::try_from(n).map_err(|e| DatabaseError::Query(format!("{table} count {n}: {e}")))
    }
}

async fn write_dataset(
    conn: &libsql::Connection,
    dataset: &ReferenceDataset,
) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "DELETE FROM substances;
         DELETE FROM interactions;
         DELETE FROM harm_advice;
         DELETE FROM symptoms;",
    )
    .await?;

    for substance in &dataset.substances {
        insert_substance(conn, substance).await?;
    }
    for record in &dataset.interactions {
        insert_interaction(conn, record).await?;
    }
    for entry in &dataset.harm_advice {
        insert_advice(conn, entry).await?;
    }
    for symptom in &dataset.symptoms {
        insert_symptom(conn, symptom).await?;
    }
    Ok(())
}
