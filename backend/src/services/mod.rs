//! Catalog building and the geometry behind the starfield.
//!
//! Everything here is pure computation over [`crate::models`] types; the
//! scene layer owns the mutable state.

pub mod camera_focus;
pub mod catalog_builder;
pub mod connections;
pub mod grid;
pub mod highlight;
pub mod projection;
pub mod search;

pub use camera_focus::{CameraFocus, CameraRig, FocusKind, FocusState};
pub use catalog_builder::{build_catalog, read_raw_catalog, write_catalog, CatalogSummary};
pub use connections::{build_connections, ConnectionEdge, NEIGHBORS_PER_STAR};
pub use grid::{axes_helper, build_grid, GridGeometry, GridMode, GridSegment};
pub use highlight::pulse_scale;
pub use projection::{project_record, spherical_to_cartesian};
pub use search::{search_stars, MAX_SEARCH_RESULTS};
