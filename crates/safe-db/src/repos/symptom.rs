//! Symptom guidance queries.

use safe_core::SymptomSeverity;
use safe_core::entities::SymptomEntry;

use crate::SafeDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_enum, placeholders};

const COLUMNS: &str = "name, severity, description, action";

fn row_to_symptom(row: &libsql::Row) -> Result<SymptomEntry, DatabaseError> {
    Ok(SymptomEntry {
        name: row.get::<String>(0)?,
        severity: parse_enum(&row.get::<String>(1)?)?,
        description: row.get::<String>(2)?,
        action: row.get::<String>(3)?,
    })
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<SymptomEntry>, DatabaseError> {
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(row_to_symptom(&row)?);
    }
    Ok(out)
}

pub async fn insert_symptom(
    conn: &libsql::Connection,
    symptom: &SymptomEntry,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO symptoms (name, severity, description, action) VALUES (?1, ?2, ?3, ?4)",
        libsql::params![
            symptom.name.as_str(),
            symptom.severity.as_str(),
            symptom.description.as_str(),
            symptom.action.as_str()
        ],
    )
    .await?;
    Ok(())
}

impl SafeDb {
    /// Every symptom, in insertion order.
    pub async fn list_symptoms(&self) -> Result<Vec<SymptomEntry>, DatabaseError> {
        let rows = self
            .conn
            .query(
                &format!("SELECT {COLUMNS} FROM symptoms ORDER BY seq"),
                (),
            )
            .await?;
        collect(rows).await
    }

    /// Symptoms whose severity is one of `severities`, in insertion order.
    pub async fn symptoms_with_severity(
        &self,
        severities: &[SymptomSeverity],
    ) -> Result<Vec<SymptomEntry>, DatabaseError> {
        if severities.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {COLUMNS} FROM symptoms WHERE severity IN ({}) ORDER BY seq",
            placeholders(severities.len())
        );
        let params: Vec<libsql::Value> = severities.iter().map(|s| s.as_str().into()).collect();
        let rows = self
            .conn
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect(rows).await
    }
}
