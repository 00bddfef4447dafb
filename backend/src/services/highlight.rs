//! Selection highlight pulse.

use std::f64::consts::TAU;
use std::time::Duration;

/// Sprite scale at the bottom of the pulse.
pub const BASE_SCALE: f64 = 0.5;
/// Extra scale at the top of the pulse.
pub const PULSE_AMPLITUDE: f64 = 0.1;

/// Highlight sprite scale at clock time `t`: one pulse per second.
pub fn pulse_scale(t: Duration) -> f64 {
    let pulse = ((t.as_secs_f64() * TAU).sin() + 1.0) / 2.0;
    BASE_SCALE + pulse * PULSE_AMPLITUDE
}
