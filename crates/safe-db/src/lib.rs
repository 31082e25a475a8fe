//! # safe-db
//!
//! libSQL-backed reference store for SafeUse.
//!
//! Holds the four reference collections (substances, interactions,
//! harm advice, symptoms), serves the read queries the check pipeline
//! needs through [`safe_core::store::ReferenceStore`], and owns the
//! destructive seed that repopulates them with the bundled dataset.
//!
//! Uses the `libsql` crate (v0.9.29) for local files, in-memory
//! databases, and remote libSQL servers alike.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod seed;
mod store;

use error::DatabaseError;
use libsql::Builder;
use safe_config::{StoreConfig, StoreTarget};

/// Handle to the reference store.
///
/// Cheap to share behind an `Arc`; libSQL connections are safe to use
/// from concurrent tasks.
pub struct SafeDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl SafeDb {
    /// Open the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(config: &StoreConfig) -> Result<Self, DatabaseError> {
        match config.target() {
            StoreTarget::Memory => Self::open_local(":memory:").await,
            StoreTarget::Local(path) => {
                let path = path.to_str().ok_or_else(|| {
                    DatabaseError::Query(format!("non UTF-8 database path: {}", path.display()))
                })?;
                Self::open_local(path).await
            }
            StoreTarget::Remote { url, auth_token } => Self::open_remote(&url, &auth_token).await,
        }
    }

    /// Open a local database file (or `:memory:`).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let safe_db = Self {
            db,
            conn,
            remote: false,
        };
        safe_db.run_migrations().await?;
        tracing::debug!(path, "opened local reference store");
        Ok(safe_db)
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let safe_db = Self {
            db,
            conn,
            remote: true,
        };
        safe_db.run_migrations().await?;
        tracing::debug!(url, "opened remote reference store");
        Ok(safe_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Round-trip a trivial query to confirm the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let mut rows = self.conn.query("SELECT 1", ()).await?;
        rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(())
    }
}
