//! Reference store (libSQL) configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_db_name() -> String {
    "safeuse".to_string()
}

/// Where the reference store lives, resolved from [`StoreConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    /// Transient in-process database.
    Memory,
    /// Local database file.
    Local(PathBuf),
    /// Remote libSQL server (`libsql://`, `https://`, `http://`).
    Remote { url: String, auth_token: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Connection string: empty, `:memory:`, a file path, or a remote URL.
    #[serde(default)]
    pub url: String,

    /// Database name. Names the local file when `url` is empty.
    #[serde(default = "default_db_name")]
    pub db_name: String,

    /// Auth token for remote databases.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            db_name: default_db_name(),
            auth_token: String::new(),
        }
    }
}

impl StoreConfig {
    /// Whether a connection string was supplied explicitly.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }

    /// Whether `url` names a remote server.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        ["libsql://", "https://", "http://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }

    /// Resolve the connection string into a concrete target.
    #[must_use]
    pub fn target(&self) -> StoreTarget {
        if self.is_remote() {
            return StoreTarget::Remote {
                url: self.url.clone(),
                auth_token: self.auth_token.clone(),
            };
        }
        match self.url.as_str() {
            ":memory:" => StoreTarget::Memory,
            "" => StoreTarget::Local(PathBuf::from(format!("{}.db", self.db_name))),
            path => StoreTarget::Local(PathBuf::from(path)),
        }
    }
}
