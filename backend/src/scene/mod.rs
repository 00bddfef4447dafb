//! Starfield scene engine.
//!
//! [`SceneState`] owns the projected stars and every primitive drawn for them.
//! [`FrameLoop`] is its single writer: input arrives as [`SceneCommand`]s and
//! is applied at the start of the next frame.

pub mod command;
pub mod entry;
pub mod frame_loop;
pub mod loader;
pub mod render;
pub mod state;
pub mod view;

pub use command::{PickRay, SceneCommand, SceneHandle};
pub use entry::{format_star_name, SceneStarEntry};
pub use frame_loop::{FrameClock, FrameLoop, FrameOutcome};
pub use loader::{load_catalog, spawn_catalog_load};
pub use render::{FallbackAction, FallbackNotice, RenderCapabilities, SceneError};
pub use state::{Highlight, SceneState, SyncStats};
pub use view::{LineMode, SpectralFilter, ViewSettings};

pub use crate::services::grid::GridMode;
