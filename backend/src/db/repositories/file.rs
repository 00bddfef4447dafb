//! JSON-file-backed repository.
//!
//! Reads the catalog written by the builder. The file is parsed once on open
//! and kept in memory; [`FileRepository::reload`] re-reads it.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::db::checksum::catalog_checksum;
use crate::db::repository::{
    validate_catalog, CatalogRepository, ErrorContext, RepositoryError, RepositoryResult,
};
use crate::models::StarRecord;

struct Cached {
    records: Arc<Vec<StarRecord>>,
    checksum: String,
}

pub struct FileRepository {
    path: PathBuf,
    cache: RwLock<Cached>,
}

impl FileRepository {
    /// Open and parse the catalog at `path`.
    pub fn open(path: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let path = path.into();
        let cached = read_catalog_file(&path)?;
        log::info!(
            "Loaded catalog {} ({} stars)",
            path.display(),
            cached.records.len()
        );
        Ok(Self {
            path,
            cache: RwLock::new(cached),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shared snapshot of the cached catalog.
    pub fn snapshot(&self) -> Arc<Vec<StarRecord>> {
        Arc::clone(&self.cache.read().records)
    }

    /// Re-read the file, replacing the cached catalog.
    pub fn reload(&self) -> RepositoryResult<usize> {
        let cached = read_catalog_file(&self.path)?;
        let count = cached.records.len();
        *self.cache.write() = cached;
        Ok(count)
    }
}

fn read_catalog_file(path: &Path) -> RepositoryResult<Cached> {
    let context = || {
        ErrorContext::new("load_catalog")
            .with_entity("catalog")
            .with_entity_id(path.display())
    };

    let content = fs::read_to_string(path).map_err(|e| {
        RepositoryError::storage_with_context(e.to_string(), context().with_details(format!("{:?}", e.kind())))
    })?;
    let records: Vec<StarRecord> = serde_json::from_str(&content).map_err(|e| {
        RepositoryError::validation_with_context(
            e.to_string(),
            context().with_details(format!("line={}, column={}", e.line(), e.column())),
        )
    })?;
    validate_catalog(&records)?;

    let checksum = catalog_checksum(&records)?;
    Ok(Cached {
        records: Arc::new(records),
        checksum,
    })
}

#[async_trait]
impl CatalogRepository for FileRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.path.is_file())
    }

    async fn load_catalog(&self) -> RepositoryResult<Vec<StarRecord>> {
        Ok(self.snapshot().as_ref().clone())
    }

    async fn catalog_checksum(&self) -> RepositoryResult<String> {
        Ok(self.cache.read().checksum.clone())
    }

    async fn replace_catalog(&self, records: Vec<StarRecord>) -> RepositoryResult<String> {
        validate_catalog(&records).map_err(|e| e.with_operation("replace_catalog"))?;
        let json = serde_json::to_string_pretty(&records)?;

        let staging = self.path.with_extension("json.partial");
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;

        let checksum = catalog_checksum(&records)?;
        *self.cache.write() = Cached {
            records: Arc::new(records),
            checksum: checksum.clone(),
        };
        log::info!("Catalog file {} replaced", self.path.display());
        Ok(checksum)
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.cache.read().records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StarComponent;

    const CATALOG: &str = r#"[
  {
    "name": "Proxima Centauri",
    "distance_ly": 4.24,
    "distance_pc": 1.3,
    "ra": "14h29m43s",
    "dec": "−62°40′46″",
    "components": [{ "name": "Proxima Centauri", "spectral_type": "M5.5Ve" }]
  },
  {
    "name": "Sirius",
    "distance_ly": 8.6,
    "distance_pc": 2.64,
    "ra": "06h45m09s",
    "dec": "−16°42′58″",
    "components": [
      { "name": "Sirius A", "spectral_type": "A1V", "mass": "2.06 M☉" },
      { "name": "Sirius B", "spectral_type": "DA2" }
    ]
  }
]"#;

    #[tokio::test]
    async fn test_open_reads_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stars.json");
        fs::write(&path, CATALOG).unwrap();

        let repo = FileRepository::open(&path).unwrap();
        assert!(repo.health_check().await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 2);

        let sirius = repo.find_star("Sirius").await.unwrap();
        assert_eq!(sirius.components.len(), 2);
        assert_eq!(sirius.components[0].mass.as_deref(), Some("2.06 M☉"));
        assert_eq!(sirius.components[1].mass, None);
    }

    #[tokio::test]
    async fn test_checksum_matches_local_repository() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stars.json");
        fs::write(&path, CATALOG).unwrap();

        let repo = FileRepository::open(&path).unwrap();
        let records = repo.load_catalog().await.unwrap();
        let local = crate::db::LocalRepository::with_catalog(records).unwrap();
        assert_eq!(
            repo.catalog_checksum().await.unwrap(),
            local.catalog_checksum().await.unwrap()
        );
    }

    #[test]
    fn test_missing_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileRepository::open(dir.path().join("nope.json"))
            .err()
            .unwrap();
        assert!(matches!(err, RepositoryError::StorageError { .. }));
        assert_eq!(err.context().operation.as_deref(), Some("load_catalog"));
    }

    #[test]
    fn test_malformed_file_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stars.json");
        fs::write(&path, "[{\"name\": \"Half").unwrap();
        let err = FileRepository::open(&path).err().unwrap();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_replace_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stars.json");
        fs::write(&path, CATALOG).unwrap();
        let repo = FileRepository::open(&path).unwrap();

        let barnard = StarRecord {
            name: "Barnard's Star".to_string(),
            distance_ly: 5.96,
            distance_pc: 1.83,
            ra: "17h57m48s".to_string(),
            dec: "+04°41′36″".to_string(),
            components: vec![StarComponent::new("Barnard's Star", "M4Ve")],
        };
        repo.replace_catalog(vec![barnard]).await.unwrap();
        assert!(!path.with_extension("json.partial").exists());

        assert_eq!(repo.reload().unwrap(), 1);
        assert_eq!(repo.load_catalog().await.unwrap()[0].name, "Barnard's Star");
    }
}
