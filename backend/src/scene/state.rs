//! Scene state: the single owner of everything the renderer draws.
//!
//! Built once per catalog load. View changes mutate visibility of the
//! existing entries in one synchronous pass; only connections and the grid
//! are rebuilt.

use nalgebra::{Point3, Vector3};
use std::sync::Arc;
use std::time::Duration;

use super::entry::SceneStarEntry;
use super::view::{LineMode, SpectralFilter, ViewSettings};
use crate::config::{FocusSettings, SceneSettings};
use crate::models::{SpectralClass, StarRecord};
use crate::services::camera_focus::{CameraFocus, CameraRig, FocusKind};
use crate::services::connections::{build_connections, ConnectionEdge};
use crate::services::grid::{axes_helper, build_grid, GridGeometry, GridMode, GridSegment};
use crate::services::highlight::pulse_scale;
use crate::services::projection::project_record;
use crate::services::search::search_indices;

/// Selection / hover marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub position: Point3<f64>,
    pub visible: bool,
    pub scale: f64,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            visible: false,
            scale: pulse_scale(Duration::ZERO),
        }
    }
}

/// Bookkeeping from the last visibility pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub visibility_passes: u64,
    pub connection_rebuilds: u64,
    /// Primitives written by the last visibility pass
    pub primitives_updated: usize,
    pub visible_stars: usize,
}

#[derive(Debug, Clone)]
pub struct SceneState {
    settings: SceneSettings,
    view: ViewSettings,
    catalog: Arc<Vec<StarRecord>>,
    entries: Vec<SceneStarEntry>,
    connections: Vec<ConnectionEdge>,
    grid: GridGeometry,
    camera: CameraRig,
    focus: CameraFocus,
    selected: Option<usize>,
    hovered: Option<usize>,
    highlight: Highlight,
    stats: SyncStats,
}

impl SceneState {
    /// An empty scene. Valid to render; shows only the grid.
    pub fn new(settings: SceneSettings, focus: FocusSettings) -> Self {
        let view = ViewSettings::from(&settings);
        let grid = build_grid(view.grid_mode, view.view_distance);
        Self {
            settings,
            view,
            catalog: Arc::new(Vec::new()),
            entries: Vec::new(),
            connections: Vec::new(),
            grid,
            camera: CameraRig::default(),
            focus: CameraFocus::new(focus),
            selected: None,
            hovered: None,
            highlight: Highlight::default(),
            stats: SyncStats::default(),
        }
    }

    // ==================== Catalog ====================

    /// Replace the scene contents with a freshly loaded catalog.
    ///
    /// Every star is projected exactly once here. Records without
    /// coordinates get no entry.
    pub fn load_catalog(&mut self, records: Vec<StarRecord>) {
        let catalog = Arc::new(records);
        self.entries = catalog
            .iter()
            .enumerate()
            .filter_map(|(i, record)| {
                project_record(record).map(|pos| SceneStarEntry::new(i, record, pos))
            })
            .collect();
        let skipped = catalog.len() - self.entries.len();
        self.catalog = catalog;
        self.selected = None;
        self.hovered = None;
        self.highlight.visible = false;

        log::info!(
            "Scene built: {} stars ({} without coordinates skipped)",
            self.entries.len(),
            skipped
        );
        self.sync();
    }

    pub fn catalog(&self) -> &[StarRecord] {
        &self.catalog
    }

    pub fn entries(&self) -> &[SceneStarEntry] {
        &self.entries
    }

    /// Entry for a catalog index.
    pub fn entry_for_record(&self, record: usize) -> Option<&SceneStarEntry> {
        self.entry_index_for_record(record).map(|i| &self.entries[i])
    }

    fn entry_index_for_record(&self, record: usize) -> Option<usize> {
        self.entries
            .binary_search_by_key(&record, |e| e.record)
            .ok()
    }

    // ==================== Synchronization ====================

    /// Full synchronization: visibility, connections, grid, then labels.
    pub fn sync(&mut self) {
        self.sync_visibility();
        self.release_hidden_picks();
        self.rebuild_connections();
        self.rebuild_grid();
        self.sync_labels();
    }

    /// Single pass over every entry updating each primitive once.
    pub fn sync_visibility(&mut self) {
        let view = &self.view;
        let stalks = view.line_mode == LineMode::Stalks;
        let mut updated = 0;
        let mut visible = 0;

        for entry in &mut self.entries {
            let within = entry.distance_ly <= view.view_distance;
            let passes = view.spectral_filter.passes(entry.spectral_class);
            let shown = within && passes;
            updated += entry.apply_visibility(shown, shown && view.show_labels, shown && stalks);
            if shown {
                visible += 1;
            }
        }

        self.stats.visibility_passes += 1;
        self.stats.primitives_updated = updated;
        self.stats.visible_stars = visible;
        log::debug!(
            "Visibility pass: {} of {} stars visible",
            visible,
            self.entries.len()
        );
    }

    /// Discard and rebuild the connection edge set from the visible stars.
    pub fn rebuild_connections(&mut self) {
        let visible: Vec<Point3<f64>> = self
            .entries
            .iter()
            .filter(|e| e.is_visible())
            .map(|e| e.position)
            .collect();
        self.connections = build_connections(&visible);
        self.stats.connection_rebuilds += 1;
        log::debug!(
            "Rebuilt {} connections between {} stars",
            self.connections.len(),
            visible.len()
        );
    }

    fn rebuild_grid(&mut self) {
        self.grid = build_grid(self.view.grid_mode, self.view.view_distance);
    }

    /// Place every label next to its star, facing the camera.
    pub fn sync_labels(&mut self) {
        let right = self.camera.right();
        let up = self.camera.screen_up();
        let offset = right * self.settings.label_pad + up * self.settings.label_v_offset;
        let orientation = self.camera.orientation();

        for entry in &mut self.entries {
            entry.label.position = entry.position + offset;
            entry.label.orientation = orientation;
        }
    }

    // ==================== View parameters ====================

    pub fn view(&self) -> &ViewSettings {
        &self.view
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Change the distance cutoff, capped at the largest configured option.
    pub fn set_view_distance(&mut self, distance: f64) {
        if !(distance.is_finite() && distance > 0.0) {
            log::warn!("Ignoring invalid view distance {}", distance);
            return;
        }
        let max = self.max_view_distance();
        if distance > max {
            log::warn!("View distance {} capped at {}", distance, max);
        }
        self.view.view_distance = distance.min(max);
        self.sync();
    }

    /// Largest selectable view distance.
    pub fn max_view_distance(&self) -> f64 {
        self.settings
            .view_distance_options
            .iter()
            .copied()
            .fold(self.settings.default_view_distance, f64::max)
    }

    pub fn set_spectral_class_enabled(&mut self, class: SpectralClass, enabled: bool) {
        self.view.spectral_filter.set(class, enabled);
        self.sync();
    }

    pub fn set_spectral_filter(&mut self, filter: SpectralFilter) {
        self.view.spectral_filter = filter;
        self.sync();
    }

    pub fn set_show_labels(&mut self, show: bool) {
        self.view.show_labels = show;
        for entry in &mut self.entries {
            entry.label.visible = show && entry.is_visible();
        }
    }

    /// Switch line mode. Entering `Connections` rebuilds the edge set.
    pub fn set_line_mode(&mut self, mode: LineMode) {
        let previous = self.view.line_mode;
        self.view.line_mode = mode;
        let stalks = mode == LineMode::Stalks;
        for entry in &mut self.entries {
            let shown = entry.is_visible();
            entry.set_stalk_visible(stalks && shown);
        }
        if mode == LineMode::Connections && previous != LineMode::Connections {
            self.rebuild_connections();
        }
    }

    pub fn set_grid_mode(&mut self, mode: GridMode) {
        self.view.grid_mode = mode;
        self.rebuild_grid();
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.view.show_grid = show;
    }

    pub fn set_show_axes(&mut self, show: bool) {
        self.view.show_axes = show;
    }

    // ==================== Derived geometry ====================

    pub fn connections(&self) -> &[ConnectionEdge] {
        &self.connections
    }

    /// Connection lines are drawn only in `Connections` mode.
    pub fn connections_visible(&self) -> bool {
        self.view.line_mode == LineMode::Connections
    }

    pub fn grid(&self) -> &GridGeometry {
        &self.grid
    }

    pub fn grid_visible(&self) -> bool {
        self.view.show_grid
    }

    pub fn axes(&self) -> Option<[GridSegment; 3]> {
        self.view.show_axes.then(axes_helper)
    }

    pub fn stats(&self) -> SyncStats {
        self.stats
    }

    // ==================== Camera ====================

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.camera
    }

    pub fn focus(&self) -> &CameraFocus {
        &self.focus
    }

    /// Focus the camera on the selected star.
    ///
    /// Does nothing without a selection.
    pub fn focus_selected(&mut self, now: Duration, kind: FocusKind) -> bool {
        let Some(position) = self.selected_entry().map(|e| e.position) else {
            return false;
        };
        self.focus.start(now, &self.camera, position, kind);
        true
    }

    /// Orient the camera back to the origin.
    pub fn reset_camera(&mut self, now: Duration) {
        self.focus.reset(now, &self.camera);
    }

    /// Advance the focus animation; returns whether the camera moved.
    pub fn advance_focus(&mut self, now: Duration) -> bool {
        self.focus.advance(now, &mut self.camera)
    }

    // ==================== Selection ====================

    pub fn selected(&self) -> Option<&StarRecord> {
        self.selected.map(|i| &self.catalog[self.entries[i].record])
    }

    fn selected_entry(&self) -> Option<&SceneStarEntry> {
        self.selected.map(|i| &self.entries[i])
    }

    pub fn hovered(&self) -> Option<&StarRecord> {
        self.hovered.map(|i| &self.catalog[self.entries[i].record])
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    /// Select a star by catalog index, or clear the selection.
    pub fn select_record(&mut self, record: Option<usize>) {
        self.selected = record.and_then(|r| self.entry_index_for_record(r));
        self.refresh_highlight();
    }

    /// Select the nearest visible star hit by a pick ray; a miss clears.
    pub fn select_at(&mut self, origin: Point3<f64>, direction: Vector3<f64>) -> Option<&StarRecord> {
        self.selected = self.pick(origin, direction);
        self.refresh_highlight();
        self.selected()
    }

    /// Hover the nearest visible star hit by a pick ray.
    pub fn hover_at(&mut self, origin: Point3<f64>, direction: Vector3<f64>) {
        self.hovered = self.pick(origin, direction);
        self.refresh_highlight();
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
        self.refresh_highlight();
    }

    /// Select a search result and orient the camera toward it.
    pub fn select_search_result(&mut self, now: Duration, query: &str, rank: usize) -> bool {
        let Some(&record) = search_indices(&self.catalog, query).get(rank) else {
            return false;
        };
        self.select_record(Some(record));
        self.focus_selected(now, FocusKind::OrientOnly)
    }

    /// Nearest visible star along a pick ray.
    pub fn pick(&self, origin: Point3<f64>, direction: Vector3<f64>) -> Option<usize> {
        let direction = direction.try_normalize(f64::EPSILON)?;
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_visible())
            .filter_map(|(i, e)| e.intersect_ray(&origin, &direction).map(|t| (i, t)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Drop hover and selection on stars the last visibility pass hid.
    fn release_hidden_picks(&mut self) {
        let entries = &self.entries;
        let shown = |i: &usize| entries.get(*i).is_some_and(|e| e.is_visible());
        self.hovered = self.hovered.filter(shown);
        self.selected = self.selected.filter(shown);
        self.refresh_highlight();
    }

    fn refresh_highlight(&mut self) {
        match self.hovered.or(self.selected) {
            Some(i) => {
                self.highlight.position = self.entries[i].position;
                self.highlight.visible = true;
            }
            None => self.highlight.visible = false,
        }
    }

    /// Pulse the highlight sprite.
    pub fn update_highlight(&mut self, now: Duration) -> bool {
        if self.highlight.visible {
            self.highlight.scale = pulse_scale(now);
        }
        self.highlight.visible
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(SceneSettings::default(), FocusSettings::default())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
