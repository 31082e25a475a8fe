//! Pairwise interaction lookups.

use safe_core::RiskLevel;
use safe_core::entities::InteractionRecord;

use crate::SafeDb;
use crate::error::DatabaseError;

const COLUMNS: &str = "substance_a, substance_b, risk_level, mechanism, notes";

fn row_to_interaction(row: &libsql::Row) -> Result<InteractionRecord, DatabaseError> {
    Ok(InteractionRecord {
        substance_a: row.get::<String>(0)?,
        substance_b: row.get::<String>(1)?,
        risk_level: RiskLevel::parse_lenient(&row.get::<String>(2)?),
        mechanism: row.get::<String>(3)?,
        notes: row.get::<String>(4)?,
    })
}

pub async fn insert_interaction(
    conn: &libsql::Connection,
    record: &InteractionRecord,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO interactions (substance_a, substance_b, risk_level, mechanism, notes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![
            record.substance_a.as_str(),
            record.substance_b.as_str(),
            record.risk_level.as_str(),
            record.mechanism.as_str(),
            record.notes.as_str()
        ],
    )
    .await?;
    Ok(())
}

impl SafeDb {
    /// First record (insertion order) for the unordered pair `{a, b}`.
    ///
    /// Stored levels that are not part of the hierarchy read as `Unknown`.
    pub async fn find_interaction(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Option<InteractionRecord>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM interactions
                     WHERE (substance_a = ?1 AND substance_b = ?2)
                        OR (substance_a = ?2 AND substance_b = ?1)
                     ORDER BY seq LIMIT 1"
                ),
                libsql::params![a, b],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_interaction(&row)?)),
            None => Ok(None),
        }
    }

    /// Every interaction record, duplicates included, in insertion order.
    pub async fn list_interactions(&self) -> Result<Vec<InteractionRecord>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {COLUMNS} FROM interactions ORDER BY seq"),
                (),
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(row_to_interaction(&row)?);
        }
        Ok(out)
    }
}
