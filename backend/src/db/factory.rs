//! Repository factory for dependency injection.
//!
//! Creates repository instances from runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repositories::{FileRepository, LocalRepository};
use super::repository::{CatalogRepository, RepositoryError, RepositoryResult};
use crate::config::ServerSettings;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Catalog JSON file on disk
    File,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("file", "json", "local", "memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use starscape::db::{RepositoryFactory, RepositoryType};
///
/// let repo = RepositoryFactory::create(RepositoryType::File, Some(Path::new("stars_60ly.json")))?;
/// let stars = repo.load_catalog().await?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// `catalog` is the JSON file to open for [`RepositoryType::File`]; for
    /// [`RepositoryType::Local`] it is optional and, when given and present,
    /// seeds the in-memory catalog.
    pub fn create(
        repo_type: RepositoryType,
        catalog: Option<&Path>,
    ) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        match repo_type {
            RepositoryType::File => {
                let path = catalog.ok_or_else(|| {
                    RepositoryError::configuration(
                        "File repository requires a catalog path",
                    )
                })?;
                Ok(Arc::new(FileRepository::open(path)?))
            }
            RepositoryType::Local => match catalog.filter(|p| p.is_file()) {
                Some(path) => {
                    let seed = FileRepository::open(path)?;
                    let records = seed.snapshot().as_ref().clone();
                    Ok(Arc::new(LocalRepository::with_catalog(records)?))
                }
                None => Ok(Self::create_local()),
            },
        }
    }

    /// Create an empty in-memory repository.
    pub fn create_local() -> Arc<dyn CatalogRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create the repository described by the `[server]` settings.
    pub fn from_settings(settings: &ServerSettings) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        let repo_type = RepositoryType::from_str(&settings.repository)
            .map_err(RepositoryError::configuration)?;
        log::info!(
            "Creating {:?} repository (catalog: {})",
            repo_type,
            settings.catalog.display()
        );
        Self::create(repo_type, Some(settings.catalog.as_path()))
    }
}
