use std::sync::Arc;

use anyhow::Context;
use safe_check::{CheckService, ExplanationGenerator};
use safe_config::SafeConfig;
use safe_db::SafeDb;

use crate::api::ApiContext;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SafeConfig,
    pub db: Arc<SafeDb>,
    pub checker: Arc<CheckService<SafeDb>>,
}

impl AppContext {
    /// Open the reference store and build the check pipeline.
    pub async fn init(config: SafeConfig) -> anyhow::Result<Self> {
        let db = SafeDb::open(&config.store)
            .await
            .context("failed to open reference store")?;
        tracing::debug!(remote = db.is_remote(), "reference store ready");

        let explainer = ExplanationGenerator::from_config(&config.llm)
            .context("failed to build text-generation client")?;

        let db = Arc::new(db);
        let checker = Arc::new(CheckService::new(Arc::clone(&db), explainer));

        Ok(Self {
            config,
            db,
            checker,
        })
    }

    /// State handed to every HTTP handler.
    pub fn api_context(&self) -> ApiContext {
        ApiContext::new(Arc::clone(&self.db), Arc::clone(&self.checker))
    }
}
