//! Shared handler state.

use std::sync::Arc;

use safe_check::CheckService;
use safe_db::SafeDb;
use tokio::sync::Mutex;

/// State available to every API handler via `State<ApiContext>`.
#[derive(Clone)]
pub struct ApiContext {
    pub db: Arc<SafeDb>,
    pub checker: Arc<CheckService<SafeDb>>,
    /// Serializes `POST /api/seed-data` calls against each other.
    pub seed_lock: Arc<Mutex<()>>,
}

impl ApiContext {
    pub fn new(db: Arc<SafeDb>, checker: Arc<CheckService<SafeDb>>) -> Self {
        Self {
            db,
            checker,
            seed_lock: Arc::new(Mutex::new(())),
        }
    }
}
