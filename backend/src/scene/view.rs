//! Interactive view parameters.

use serde::{Deserialize, Serialize};

use crate::config::SceneSettings;
use crate::models::SpectralClass;
use crate::services::grid::GridMode;

/// How stars are tied together visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineMode {
    /// Nearest-neighbor lines between visible stars
    #[default]
    Connections,
    /// Vertical drop lines to the y = 0 plane
    Stalks,
    None,
}

/// Per-class enable flags. Every class starts enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectralFilter {
    enabled: [bool; SpectralClass::ALL.len()],
}

impl Default for SpectralFilter {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl SpectralFilter {
    pub fn all_enabled() -> Self {
        Self {
            enabled: [true; SpectralClass::ALL.len()],
        }
    }

    pub fn none_enabled() -> Self {
        Self {
            enabled: [false; SpectralClass::ALL.len()],
        }
    }

    pub fn set(&mut self, class: SpectralClass, enabled: bool) {
        self.enabled[class.index()] = enabled;
    }

    pub fn is_enabled(&self, class: SpectralClass) -> bool {
        self.enabled[class.index()]
    }

    /// Filter predicate. Stars without a recognized class never pass.
    pub fn passes(&self, class: Option<SpectralClass>) -> bool {
        class.is_some_and(|c| self.is_enabled(c))
    }
}

/// Current view parameters of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub view_distance: f64,
    pub spectral_filter: SpectralFilter,
    pub show_labels: bool,
    pub line_mode: LineMode,
    pub grid_mode: GridMode,
    pub show_grid: bool,
    pub show_axes: bool,
}

impl From<&SceneSettings> for ViewSettings {
    fn from(settings: &SceneSettings) -> Self {
        Self {
            view_distance: settings.default_view_distance,
            spectral_filter: SpectralFilter::all_enabled(),
            show_labels: settings.show_labels,
            line_mode: settings.line_mode,
            grid_mode: settings.grid_mode,
            show_grid: settings.show_grid,
            show_axes: settings.show_axes,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from(&SceneSettings::default())
    }
}
