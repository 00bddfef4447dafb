//! Scene commands.
//!
//! Input callbacks never touch [`SceneState`] directly. They send a
//! [`SceneCommand`] through a [`SceneHandle`]; the frame loop drains the
//! queue at the start of each tick so a frame sees either the old or the new
//! state, never a mix.

use nalgebra::{Point3, Vector3};
use std::time::Duration;
use tokio::sync::mpsc;

use super::state::SceneState;
use super::view::{LineMode, SpectralFilter};
use crate::models::{SpectralClass, StarRecord};
use crate::services::camera_focus::FocusKind;
use crate::services::grid::GridMode;

/// A pick ray in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRay {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Catalog fetched; rebuild the scene
    CatalogLoaded(Vec<StarRecord>),
    SetViewDistance(f64),
    SetSpectralClass { class: SpectralClass, enabled: bool },
    SetSpectralFilter(SpectralFilter),
    SetShowLabels(bool),
    SetLineMode(LineMode),
    SetGridMode(GridMode),
    SetShowGrid(bool),
    SetShowAxes(bool),
    /// Pointer moved over the canvas
    Hover(PickRay),
    /// Pointer left the canvas
    HoverCleared,
    /// Click without drag: select what the ray hits, or clear
    Click(PickRay),
    /// Select by catalog index
    Select(Option<usize>),
    /// Pick the `rank`-th search result and orient toward it
    SelectSearchResult { query: String, rank: usize },
    /// Focus button: orient toward the selection
    FocusSelected,
    /// Context action: orient toward the selection and zoom in
    FocusAndZoomSelected,
    ResetCamera,
    /// Orbit controls drag, radians
    Orbit { azimuth: f64, elevation: f64 },
    /// Orbit controls wheel, radius factor
    Dolly(f64),
}

impl SceneCommand {
    /// Apply to `state` at frame-clock time `now`.
    pub fn apply(self, state: &mut SceneState, now: Duration) {
        match self {
            Self::CatalogLoaded(records) => state.load_catalog(records),
            Self::SetViewDistance(distance) => state.set_view_distance(distance),
            Self::SetSpectralClass { class, enabled } => {
                state.set_spectral_class_enabled(class, enabled)
            }
            Self::SetSpectralFilter(filter) => state.set_spectral_filter(filter),
            Self::SetShowLabels(show) => state.set_show_labels(show),
            Self::SetLineMode(mode) => state.set_line_mode(mode),
            Self::SetGridMode(mode) => state.set_grid_mode(mode),
            Self::SetShowGrid(show) => state.set_show_grid(show),
            Self::SetShowAxes(show) => state.set_show_axes(show),
            Self::Hover(ray) => state.hover_at(ray.origin, ray.direction),
            Self::HoverCleared => state.clear_hover(),
            Self::Click(ray) => {
                state.select_at(ray.origin, ray.direction);
            }
            Self::Select(record) => state.select_record(record),
            Self::SelectSearchResult { query, rank } => {
                state.select_search_result(now, &query, rank);
            }
            Self::FocusSelected => {
                state.focus_selected(now, FocusKind::OrientOnly);
            }
            Self::FocusAndZoomSelected => {
                state.focus_selected(now, FocusKind::OrientThenZoom);
            }
            Self::ResetCamera => state.reset_camera(now),
            Self::Orbit { azimuth, elevation } => state.camera_mut().orbit(azimuth, elevation),
            Self::Dolly(factor) => state.camera_mut().dolly(factor),
        }
    }
}

/// Cloneable sender for scene commands.
#[derive(Debug, Clone)]
pub struct SceneHandle {
    sender: mpsc::UnboundedSender<SceneCommand>,
}

impl SceneHandle {
    pub(crate) fn new(sender: mpsc::UnboundedSender<SceneCommand>) -> Self {
        Self { sender }
    }

    /// Queue a command for the next frame.
    ///
    /// Returns `false` once the frame loop is gone.
    pub fn send(&self, command: SceneCommand) -> bool {
        self.sender.send(command).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StarComponent;

    fn altair() -> StarRecord {
        StarRecord {
            name: "Altair".to_string(),
            distance_ly: 16.73,
            distance_pc: 5.13,
            ra: "19h50m47s".to_string(),
            dec: "+08°52′06″".to_string(),
            components: vec![StarComponent::new("Altair", "A7V")],
        }
    }

    #[test]
    fn test_apply_view_commands() {
        let mut state = SceneState::default();
        SceneCommand::CatalogLoaded(vec![altair()]).apply(&mut state, Duration::ZERO);
        assert_eq!(state.entries().len(), 1);
        assert!(state.entries()[0].is_visible());

        SceneCommand::SetViewDistance(12.0).apply(&mut state, Duration::ZERO);
        assert!(!state.entries()[0].is_visible());

        SceneCommand::SetViewDistance(300.0).apply(&mut state, Duration::ZERO);
        assert_eq!(state.view().view_distance, 20.0);
        assert!(state.entries()[0].is_visible());

        SceneCommand::SetSpectralClass {
            class: SpectralClass::A,
            enabled: false,
        }
        .apply(&mut state, Duration::ZERO);
        assert!(!state.entries()[0].is_visible());

        SceneCommand::SetLineMode(LineMode::Stalks).apply(&mut state, Duration::ZERO);
        assert_eq!(state.view().line_mode, LineMode::Stalks);
    }

    #[test]
    fn test_focus_commands_need_selection() {
        let mut state = SceneState::default();
        SceneCommand::CatalogLoaded(vec![altair()]).apply(&mut state, Duration::ZERO);
        SceneCommand::FocusAndZoomSelected.apply(&mut state, Duration::ZERO);
        assert!(!state.focus().is_animating());

        SceneCommand::Select(Some(0)).apply(&mut state, Duration::ZERO);
        SceneCommand::FocusAndZoomSelected.apply(&mut state, Duration::ZERO);
        assert!(state.focus().is_animating());
    }

    #[test]
    fn test_handle_reports_closed_loop() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = SceneHandle::new(tx);
        assert!(handle.send(SceneCommand::ResetCamera));
        drop(rx);
        assert!(!handle.send(SceneCommand::ResetCamera));
    }
}
