//! Catalog repository implementations.

pub mod file;
pub mod local;

pub use file::FileRepository;
pub use local::LocalRepository;
