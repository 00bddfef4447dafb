//! Catalog storage.
//!
//! The catalog is reached through the [`CatalogRepository`] trait so the
//! server and the scene loader do not care where it lives.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  HTTP handlers / scene catalog loader        │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  CatalogRepository (repository/mod.rs)       │
//! └─────────┬─────────────────────────┬──────────┘
//!           │                         │
//!   ┌───────▼────────┐       ┌────────▼────────┐
//!   │ FileRepository │       │ LocalRepository │
//!   │  (JSON file)   │       │   (in-memory)   │
//!   └────────────────┘       └─────────────────┘
//! ```
//!
//! Use [`RepositoryFactory`] to build the backend named in configuration.

pub mod checksum;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use checksum::{calculate_checksum, catalog_checksum};
pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::{FileRepository, LocalRepository};
pub use repository::{
    validate_catalog, CatalogRepository, ErrorContext, RepositoryError, RepositoryResult,
};
