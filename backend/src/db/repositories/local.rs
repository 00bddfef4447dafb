//! In-memory local repository implementation.
//!
//! Holds the catalog in memory; used for tests and for serving a catalog that
//! was built in-process.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::db::checksum::catalog_checksum;
use crate::db::repository::{
    validate_catalog, CatalogRepository, RepositoryError, RepositoryResult,
};
use crate::models::StarRecord;

/// In-memory local repository.
///
/// Clones share the same catalog.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    records: Arc<Vec<StarRecord>>,
    checksum: String,
    // Connection health
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                records: Arc::new(Vec::new()),
                checksum: String::new(),
                is_healthy: true,
            })),
        }
    }

    /// Create a repository holding `records`.
    pub fn with_catalog(records: Vec<StarRecord>) -> RepositoryResult<Self> {
        let repo = Self::new();
        repo.store(records)?;
        Ok(repo)
    }

    /// Set the health status for testing failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Shared snapshot of the current catalog.
    pub fn snapshot(&self) -> Arc<Vec<StarRecord>> {
        Arc::clone(&self.data.read().records)
    }

    fn store(&self, mut records: Vec<StarRecord>) -> RepositoryResult<String> {
        validate_catalog(&records).map_err(|e| e.with_operation("replace_catalog"))?;
        records.sort_by(|a, b| {
            a.distance_ly
                .total_cmp(&b.distance_ly)
                .then_with(|| a.name.cmp(&b.name))
        });
        let checksum = catalog_checksum(&records)?;

        let mut data = self.data.write();
        data.records = Arc::new(records);
        data.checksum = checksum.clone();
        Ok(checksum)
    }

    fn ensure_healthy(&self) -> RepositoryResult<()> {
        if self.data.read().is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::storage("Local repository marked unhealthy"))
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn load_catalog(&self) -> RepositoryResult<Vec<StarRecord>> {
        self.ensure_healthy()?;
        Ok(self.snapshot().as_ref().clone())
    }

    async fn catalog_checksum(&self) -> RepositoryResult<String> {
        self.ensure_healthy()?;
        let data = self.data.read();
        if data.checksum.is_empty() {
            return catalog_checksum(&data.records);
        }
        Ok(data.checksum.clone())
    }

    async fn replace_catalog(&self, records: Vec<StarRecord>) -> RepositoryResult<String> {
        self.ensure_healthy()?;
        let checksum = self.store(records)?;
        log::info!("Local catalog replaced ({} stars)", self.data.read().records.len());
        Ok(checksum)
    }

    async fn count(&self) -> RepositoryResult<usize> {
        self.ensure_healthy()?;
        Ok(self.data.read().records.len())
    }
}
