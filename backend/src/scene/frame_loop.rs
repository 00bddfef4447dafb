//! Frame-driven scene loop.
//!
//! The host calls [`FrameLoop::tick`] once per display frame with its
//! monotonic timestamp. Each tick drains queued commands, advances the focus
//! animation, pulses the highlight and re-faces the labels. All of it happens
//! synchronously on the calling thread.

use std::time::Duration;
use tokio::sync::mpsc;

use super::command::{SceneCommand, SceneHandle};
use super::render::{probe, RenderCapabilities, SceneError};
use super::state::SceneState;
use crate::config::{PerformanceSettings, StarscapeConfig};

/// Accumulated frame time.
///
/// Only deltas between consecutive ticks count, so a pause (or a reset)
/// never produces one huge step.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    elapsed: Duration,
    last: Option<Duration>,
}

impl FrameClock {
    /// Advance to the host timestamp and return the clock time.
    pub fn advance(&mut self, timestamp: Duration) -> Duration {
        if let Some(last) = self.last {
            self.elapsed += timestamp.saturating_sub(last);
        }
        self.last = Some(timestamp);
        self.elapsed
    }

    /// Forget the last timestamp; the next tick adds no delta.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Loop paused, nothing ran
    Paused,
    /// Commands drained, sync and render skipped
    Throttled,
    /// Full frame: sync done, host should draw
    Rendered,
}

pub struct FrameLoop {
    state: SceneState,
    commands: mpsc::UnboundedReceiver<SceneCommand>,
    handle: SceneHandle,
    clock: FrameClock,
    performance: PerformanceSettings,
    paused: bool,
    idle_frames: u32,
    frames_rendered: u64,
}

impl FrameLoop {
    /// Create the loop after probing the host's rendering support.
    pub fn new(
        config: &StarscapeConfig,
        capabilities: &RenderCapabilities,
    ) -> Result<Self, SceneError> {
        probe(capabilities)?;
        let (sender, commands) = mpsc::unbounded_channel();
        Ok(Self {
            state: SceneState::new(config.scene.clone(), config.focus.clone()),
            commands,
            handle: SceneHandle::new(sender),
            clock: FrameClock::default(),
            performance: config.performance.clone(),
            paused: false,
            idle_frames: 0,
            frames_rendered: 0,
        })
    }

    /// Sender for input callbacks and the catalog loader.
    pub fn handle(&self) -> SceneHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Host page hidden.
    pub fn pause(&mut self) {
        if !self.paused {
            log::debug!("Frame loop paused");
        }
        self.paused = true;
    }

    /// Host page visible again.
    pub fn resume(&mut self) {
        if self.paused {
            log::debug!("Frame loop resumed");
            self.clock.reset();
            self.idle_frames = 0;
        }
        self.paused = false;
    }

    /// Run one frame at host timestamp `timestamp`.
    pub fn tick(&mut self, timestamp: Duration) -> FrameOutcome {
        if self.paused {
            return FrameOutcome::Paused;
        }
        let now = self.clock.advance(timestamp);

        let drained = self.drain_commands(now);
        let camera_moved = self.state.advance_focus(now);
        let highlighted = self.state.highlight().visible;

        if drained > 0 || camera_moved || highlighted {
            self.idle_frames = 0;
        } else {
            self.idle_frames = self.idle_frames.saturating_add(1);
        }

        if self.is_throttled() {
            return FrameOutcome::Throttled;
        }

        self.state.update_highlight(now);
        self.state.sync_labels();
        self.frames_rendered += 1;
        FrameOutcome::Rendered
    }

    fn drain_commands(&mut self, now: Duration) -> usize {
        let mut drained = 0;
        while let Ok(command) = self.commands.try_recv() {
            command.apply(&mut self.state, now);
            drained += 1;
        }
        drained
    }

    fn is_throttled(&self) -> bool {
        let perf = &self.performance;
        if !perf.idle_skip || self.idle_frames < perf.idle_threshold_frames {
            return false;
        }
        let since = self.idle_frames - perf.idle_threshold_frames;
        since % perf.idle_render_interval.max(1) != 0
    }
}

#[cfg(test)]
#[path = "frame_loop_tests.rs"]
mod frame_loop_tests;
