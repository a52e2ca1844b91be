use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::database::seed;
use crate::models::ActivityCatalog;

/// Shared handle to the in-memory catalog. Cloning shares the same state.
///
/// Every roster change happens under the single write guard, so the
/// membership check and the edit are atomic across request workers.
#[derive(Clone, Debug, Default)]
pub struct ActivityDirectory {
    catalog: Arc<RwLock<ActivityCatalog>>,
}

impl ActivityDirectory {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_catalog())
    }

    /// Restores the seed catalog, dropping every roster change.
    pub async fn reset(&self) {
        *self.catalog.write().await = seed::seed_catalog();
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, ActivityCatalog> {
        self.catalog.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, ActivityCatalog> {
        self.catalog.write().await
    }
}
