//! Harm-reduction advice queries.

use safe_core::AdviceContext;
use safe_core::entities::HarmAdviceEntry;

use crate::SafeDb;
use crate::error::DatabaseError;
use crate::helpers::parse_enum;

fn row_to_advice(row: &libsql::Row) -> Result<HarmAdviceEntry, DatabaseError> {
    Ok(HarmAdviceEntry {
        context: parse_enum(&row.get::<String>(0)?)?,
        advice: row.get::<String>(1)?,
    })
}

pub async fn insert_advice(
    conn: &libsql::Connection,
    entry: &HarmAdviceEntry,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO harm_advice (context, advice) VALUES (?1, ?2)",
        libsql::params![entry.context.as_str(), entry.advice.as_str()],
    )
    .await?;
    Ok(())
}

impl SafeDb {
    /// Entries tagged `context` or `both`, in insertion order.
    pub async fn advice_for_context(
        &self,
        context: AdviceContext,
    ) -> Result<Vec<HarmAdviceEntry>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT context, advice FROM harm_advice
                 WHERE context IN (?1, ?2) ORDER BY seq",
                libsql::params![context.as_str(), AdviceContext::Both.as_str()],
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(row_to_advice(&row)?);
        }
        Ok(out)
    }

    #[cfg(test)]
    pub(crate) async fn list_advice(&self) -> Result<Vec<HarmAdviceEntry>, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT context, advice FROM harm_advice ORDER BY seq", ())
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(row_to_advice(&row)?);
        }
        Ok(out)
    }
}
