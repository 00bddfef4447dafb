//! Camera focus animation.
//!
//! A focus request first orients the camera (the orbit target slides to the
//! destination while the camera stays put) and then, for zooming requests,
//! pulls the camera in along its current direction until the orbit radius
//! reaches the configured value. At most one animation is in flight; starting
//! a new one discards the previous and restarts from the live camera.

use nalgebra::{Point3, UnitQuaternion, Vector3};
use std::time::Duration;

use crate::config::FocusSettings;

/// Initial camera position of a fresh scene.
pub const HOME_POSITION: [f64; 3] = [15.0, 15.0, 15.0];

/// Closest orbit radius the controls allow.
pub const MIN_ORBIT_RADIUS: f64 = 5.0;
/// Farthest orbit radius the controls allow.
pub const MAX_ORBIT_RADIUS: f64 = 100.0;

/// Orbit camera: eye position, look-at target and up vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Point3::from(HOME_POSITION),
            target: Point3::origin(),
            up: Vector3::y(),
        }
    }
}

impl CameraRig {
    /// Distance from the eye to the orbit target.
    pub fn orbit_radius(&self) -> f64 {
        nalgebra::distance(&self.position, &self.target)
    }

    pub fn view_direction(&self) -> Vector3<f64> {
        (self.target - self.position)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(|| -Vector3::z())
    }

    /// Unit vector pointing right on screen (`view_dir × up`).
    pub fn right(&self) -> Vector3<f64> {
        self.view_direction()
            .cross(&self.up)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::x)
    }

    /// Unit vector pointing up on screen.
    pub fn screen_up(&self) -> Vector3<f64> {
        self.up.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::y)
    }

    /// Camera orientation; the local -Z axis looks at the target.
    pub fn orientation(&self) -> UnitQuaternion<f64> {
        let backward = -self.view_direction();
        if backward.cross(&self.up).norm() <= f64::EPSILON {
            return UnitQuaternion::identity();
        }
        UnitQuaternion::face_towards(&backward, &self.up)
    }

    /// Orbit by the given angles around the target, keeping the radius.
    pub fn orbit(&mut self, azimuth: f64, elevation: f64) {
        let offset = self.position - self.target;
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), azimuth);
        let offset = yaw * offset;
        let pitch_axis = nalgebra::Unit::try_new(offset.cross(&self.up), f64::EPSILON);
        let offset = match pitch_axis {
            Some(axis) => UnitQuaternion::from_axis_angle(&axis, elevation) * offset,
            None => offset,
        };
        self.position = self.target + offset;
    }

    /// Move toward or away from the target, clamped to the orbit limits.
    pub fn dolly(&mut self, factor: f64) {
        let offset = self.position - self.target;
        let radius = (offset.norm() * factor).clamp(MIN_ORBIT_RADIUS, MAX_ORBIT_RADIUS);
        let direction = offset
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::z);
        self.position = self.target + direction * radius;
    }
}

/// What a focus request does once oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusKind {
    /// Focus button, search selection and camera reset
    OrientOnly,
    /// Focus-and-zoom on the selected star
    OrientThenZoom,
}

/// Animation state. Times are frame-clock offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusState {
    Idle,
    Orienting {
        started_at: Duration,
        start_position: Point3<f64>,
        start_target: Point3<f64>,
        destination: Point3<f64>,
        kind: FocusKind,
    },
    Zooming {
        started_at: Duration,
        start_position: Point3<f64>,
        target: Point3<f64>,
        start_radius: f64,
    },
}

/// Cubic ease-in-out on `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn progress(started_at: Duration, now: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(started_at);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

fn lerp_point(a: &Point3<f64>, b: &Point3<f64>, t: f64) -> Point3<f64> {
    Point3::from(a.coords.lerp(&b.coords, t))
}

/// Drives [`FocusState`] from frame to frame.
#[derive(Debug, Clone)]
pub struct CameraFocus {
    state: FocusState,
    settings: FocusSettings,
}

impl CameraFocus {
    pub fn new(settings: FocusSettings) -> Self {
        Self {
            state: FocusState::Idle,
            settings,
        }
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.state, FocusState::Idle)
    }

    /// Start a focus animation toward `destination`, replacing any in flight.
    pub fn start(
        &mut self,
        now: Duration,
        camera: &CameraRig,
        destination: Point3<f64>,
        kind: FocusKind,
    ) {
        if self.is_animating() {
            log::debug!("Focus re-triggered, discarding {:?}", self.state);
        }
        self.state = FocusState::Orienting {
            started_at: now,
            start_position: camera.position,
            start_target: camera.target,
            destination,
            kind,
        };
    }

    /// Orient back to the world origin.
    pub fn reset(&mut self, now: Duration, camera: &CameraRig) {
        self.start(now, camera, Point3::origin(), FocusKind::OrientOnly);
    }

    /// Abandon the current animation, leaving the camera where it is.
    pub fn cancel(&mut self) {
        self.state = FocusState::Idle;
    }

    /// Advance the animation to `now`, moving the camera.
    ///
    /// Returns `true` when an animation was active during this call.
    pub fn advance(&mut self, now: Duration, camera: &mut CameraRig) -> bool {
        match self.state {
            FocusState::Idle => false,
            FocusState::Orienting {
                started_at,
                start_position,
                start_target,
                destination,
                kind,
            } => {
                let t = progress(started_at, now, self.settings.orient_duration());
                camera.position = start_position;
                camera.target = lerp_point(&start_target, &destination, ease_in_out_cubic(t));

                if t >= 1.0 {
                    camera.target = destination;
                    self.state = match kind {
                        FocusKind::OrientOnly => FocusState::Idle,
                        FocusKind::OrientThenZoom => FocusState::Zooming {
                            started_at: started_at + self.settings.orient_duration(),
                            start_position: camera.position,
                            target: destination,
                            start_radius: camera.orbit_radius(),
                        },
                    };
                    if matches!(self.state, FocusState::Zooming { .. }) {
                        self.advance(now, camera);
                    }
                }
                true
            }
            FocusState::Zooming {
                started_at,
                start_position,
                target,
                start_radius,
            } => {
                let t = progress(started_at, now, self.settings.zoom_duration());
                let direction = (start_position - target)
                    .try_normalize(f64::EPSILON)
                    .unwrap_or_else(Vector3::z);
                let eased = ease_in_out_cubic(t);
                let radius = start_radius + (self.settings.zoom_radius - start_radius) * eased;

                camera.target = target;
                camera.position = target + direction * radius;

                if t >= 1.0 {
                    self.state = FocusState::Idle;
                }
                true
            }
        }
    }
}

#[cfg(test)]
#[path = "camera_focus_tests.rs"]
mod camera_focus_tests;
