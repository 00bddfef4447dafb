use super::*;
use crate::models::{StarComponent, StarRecord};
use crate::scene::render::RenderCapabilities;
use crate::services::camera_focus::FocusState;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn frame_loop() -> FrameLoop {
    FrameLoop::new(&StarscapeConfig::default(), &RenderCapabilities::available()).unwrap()
}

fn stars() -> Vec<StarRecord> {
    ["Alpha", "Beta", "Gamma"]
        .iter()
        .enumerate()
        .map(|(i, name)| StarRecord {
            name: name.to_string(),
            distance_ly: 4.0 + 4.0 * i as f64,
            distance_pc: 1.0,
            ra: format!("{:02}h00m00s", 3 * i),
            dec: "+20°00′00″".to_string(),
            components: vec![StarComponent::new(*name, "G2V")],
        })
        .collect()
}

#[test]
fn test_clock_accumulates_deltas() {
    let mut clock = FrameClock::default();
    assert_eq!(clock.advance(ms(1_000)), Duration::ZERO);
    assert_eq!(clock.advance(ms(1_016)), ms(16));
    assert_eq!(clock.advance(ms(1_048)), ms(48));
}

#[test]
fn test_clock_reset_skips_gap() {
    let mut clock = FrameClock::default();
    clock.advance(ms(0));
    clock.advance(ms(16));
    clock.reset();
    assert_eq!(clock.advance(ms(60_000)), ms(16));
    assert_eq!(clock.advance(ms(60_016)), ms(32));
}

#[test]
fn test_new_requires_rendering_support() {
    let result = FrameLoop::new(
        &StarscapeConfig::default(),
        &RenderCapabilities::unavailable("no GPU"),
    );
    assert!(matches!(result, Err(SceneError::RenderingUnavailable { .. })));
}

#[test]
fn test_commands_apply_at_next_tick() {
    let mut fl = frame_loop();
    let handle = fl.handle();
    handle.send(SceneCommand::CatalogLoaded(stars()));
    handle.send(SceneCommand::SetViewDistance(8.0));
    assert!(fl.state().entries().is_empty());

    assert_eq!(fl.tick(ms(0)), FrameOutcome::Rendered);
    assert_eq!(fl.state().entries().len(), 3);
    assert_eq!(fl.state().view().view_distance, 8.0);
    assert_eq!(fl.state().stats().visible_stars, 2);
}

#[test]
fn test_idle_frames_are_throttled() {
    let mut fl = frame_loop();
    let mut rendered = 0;
    for frame in 1..=200u64 {
        let outcome = fl.tick(ms(frame * 16));
        if outcome == FrameOutcome::Rendered {
            rendered += 1;
        }
        match frame {
            1..=120 => assert_eq!(outcome, FrameOutcome::Rendered, "frame {}", frame),
            121..=129 => assert_eq!(outcome, FrameOutcome::Throttled, "frame {}", frame),
            130 => assert_eq!(outcome, FrameOutcome::Rendered),
            _ => {}
        }
    }
    // 120 active frames, then every 10th of the remaining 80
    assert_eq!(rendered, 128);
    assert_eq!(fl.frames_rendered(), 128);
}

#[test]
fn test_input_is_drained_while_throttled() {
    let mut fl = frame_loop();
    for frame in 1..=125u64 {
        fl.tick(ms(frame * 16));
    }
    assert_eq!(fl.tick(ms(126 * 16)), FrameOutcome::Throttled);

    fl.handle().send(SceneCommand::SetShowAxes(true));
    assert_eq!(fl.tick(ms(127 * 16)), FrameOutcome::Rendered);
    assert!(fl.state().view().show_axes);
}

#[test]
fn test_idle_skip_can_be_disabled() {
    let mut config = StarscapeConfig::default();
    config.performance.idle_skip = false;
    let mut fl = FrameLoop::new(&config, &RenderCapabilities::available()).unwrap();
    for frame in 1..=300u64 {
        assert_eq!(fl.tick(ms(frame * 16)), FrameOutcome::Rendered);
    }
}

#[test]
fn test_highlight_keeps_loop_active() {
    let mut fl = frame_loop();
    let handle = fl.handle();
    handle.send(SceneCommand::CatalogLoaded(stars()));
    handle.send(SceneCommand::Select(Some(0)));
    for frame in 1..=300u64 {
        assert_eq!(fl.tick(ms(frame * 16)), FrameOutcome::Rendered);
    }
}

#[test]
fn test_pause_stops_frames_and_resume_resets_clock() {
    let mut fl = frame_loop();
    let handle = fl.handle();
    handle.send(SceneCommand::CatalogLoaded(stars()));
    handle.send(SceneCommand::Select(Some(2)));
    handle.send(SceneCommand::FocusSelected);
    fl.tick(ms(0));
    fl.tick(ms(100));

    fl.pause();
    assert_eq!(fl.tick(ms(5_000)), FrameOutcome::Paused);
    handle.send(SceneCommand::SetShowGrid(false));
    assert_eq!(fl.tick(ms(9_000)), FrameOutcome::Paused);
    assert!(fl.state().view().show_grid);

    fl.resume();
    fl.tick(ms(10_000));
    assert_eq!(fl.clock().elapsed(), ms(100));
    assert!(!fl.state().view().show_grid);
    assert!(matches!(
        fl.state().focus().state(),
        FocusState::Orienting { .. }
    ));

    // 800 ms of frame time after the focus started
    fl.tick(ms(10_700));
    assert!(!fl.state().focus().is_animating());
    let target = fl.state().entries()[2].position;
    assert_eq!(fl.state().camera().target, target);
}
