//! Reference grid geometry on the y = 0 plane.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Spacing of square grid lines, light-years.
pub const SQUARE_STEP_LY: f64 = 4.0;
/// Ring radii of the circular grid, light-years.
pub const CIRCULAR_RINGS_LY: [f64; 5] = [4.0, 8.0, 12.0, 16.0, 20.0];
/// Radial spokes of the circular grid (N, NE, E, ...).
pub const RADIAL_SPOKES: usize = 8;
/// Line segments used to draw one ring.
pub const RING_SEGMENTS: usize = 64;
/// Length of the axes helper.
pub const AXES_LENGTH: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    #[default]
    Circular,
    Square,
}

/// A straight grid line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSegment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl GridSegment {
    fn new(start: [f64; 3], end: [f64; 3]) -> Self {
        Self {
            start: Point3::from(start),
            end: Point3::from(end),
        }
    }
}

/// Grid geometry for one view distance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridGeometry {
    /// Straight lines (square grid lines or radial spokes)
    pub segments: Vec<GridSegment>,
    /// Closed ring outlines, each `RING_SEGMENTS + 1` points
    pub rings: Vec<Vec<Point3<f64>>>,
}

/// Lines every [`SQUARE_STEP_LY`] from `-extent` to `+extent` along X and Z.
pub fn square_grid(extent: f64) -> GridGeometry {
    let mut segments = Vec::new();
    if extent > 0.0 {
        let count = (2.0 * extent / SQUARE_STEP_LY).floor() as usize + 1;
        for k in 0..count {
            let i = -extent + k as f64 * SQUARE_STEP_LY;
            segments.push(GridSegment::new([i, 0.0, -extent], [i, 0.0, extent]));
            segments.push(GridSegment::new([-extent, 0.0, i], [extent, 0.0, i]));
        }
    }
    GridGeometry {
        segments,
        rings: Vec::new(),
    }
}

/// Rings no larger than `extent` plus [`RADIAL_SPOKES`] spokes of length `extent`.
pub fn circular_grid(extent: f64) -> GridGeometry {
    let rings = CIRCULAR_RINGS_LY
        .iter()
        .filter(|&&radius| radius <= extent)
        .map(|&radius| ring(radius))
        .collect();

    let segments = (0..RADIAL_SPOKES)
        .map(|i| {
            let angle = i as f64 / RADIAL_SPOKES as f64 * TAU;
            let (sin, cos) = angle.sin_cos();
            GridSegment::new([0.0, 0.0, 0.0], [extent * cos, 0.0, extent * sin])
        })
        .collect();

    GridGeometry { segments, rings }
}

fn ring(radius: f64) -> Vec<Point3<f64>> {
    (0..=RING_SEGMENTS)
        .map(|i| {
            let theta = i as f64 / RING_SEGMENTS as f64 * TAU;
            let (sin, cos) = theta.sin_cos();
            Point3::new(radius * cos, 0.0, radius * sin)
        })
        .collect()
}

pub fn build_grid(mode: GridMode, extent: f64) -> GridGeometry {
    match mode {
        GridMode::Circular => circular_grid(extent),
        GridMode::Square => square_grid(extent),
    }
}

/// X, Y and Z axis segments of the axes helper.
pub fn axes_helper() -> [GridSegment; 3] {
    [
        GridSegment::new([0.0, 0.0, 0.0], [AXES_LENGTH, 0.0, 0.0]),
        GridSegment::new([0.0, 0.0, 0.0], [0.0, AXES_LENGTH, 0.0]),
        GridSegment::new([0.0, 0.0, 0.0], [0.0, 0.0, AXES_LENGTH]),
    ]
}
