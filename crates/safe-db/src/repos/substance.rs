//! Substance catalog queries.

use safe_core::entities::Substance;

use crate::SafeDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_string_list, placeholders};

const COLUMNS: &str = "id, name, drug_class, common_names";

fn row_to_substance(row: &libsql::Row) -> Result<Substance, DatabaseError> {
    Ok(Substance {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        drug_class: row.get::<String>(2)?,
        common_names: parse_string_list(&row.get::<String>(3)?)?,
    })
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<Substance>, DatabaseError> {
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(row_to_substance(&row)?);
    }
    Ok(out)
}

/// Insert one substance. Fails on a duplicate id.
pub async fn insert_substance(
    conn: &libsql::Connection,
    substance: &Substance,
) -> Result<(), DatabaseError> {
    let common_names = serde_json::to_string(&substance.common_names)
        .map_err(|e| DatabaseError::Other(e.into()))?;
    conn.execute(
        "INSERT INTO substances (id, name, drug_class, common_names) VALUES (?1, ?2, ?3, ?4)",
        libsql::params![
            substance.id.as_str(),
            substance.name.as_str(),
            substance.drug_class.as_str(),
            common_names
        ],
    )
    .await?;
    Ok(())
}

impl SafeDb {
    /// Every substance, in catalog order.
    pub async fn list_substances(&self) -> Result<Vec<Substance>, DatabaseError> {
        let rows = self
            .conn
            .query(
                &format!("SELECT {COLUMNS} FROM substances ORDER BY seq"),
                (),
            )
            .await?;
        collect(rows).await
    }

    /// Substances whose id appears in `ids`, in catalog order, each once.
    pub async fn substances_by_ids(&self, ids: &[String]) -> Result<Vec<Substance>, DatabaseError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {COLUMNS} FROM substances WHERE id IN ({}) ORDER BY seq",
            placeholders(ids.len())
        );
        let params: Vec<libsql::Value> = ids.iter().map(|id| id.as_str().into()).collect();
        let rows = self
            .conn
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect(rows).await
    }

    #[cfg(test)]
    pub(crate) async fn get_substance(&self, id: &str) -> Result<Option<Substance>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {COLUMNS} FROM substances WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_substance(&row)?)),
            None => Ok(None),
        }
    }
}
