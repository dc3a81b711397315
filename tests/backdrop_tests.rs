// Facade lifecycle: construction, pacing, resize, dispose inertness.

use glam::Vec2;
use neon_backdrop::{Backdrop, BackdropParams, DeviceHints, Tier};

fn desktop_hints() -> DeviceHints {
    DeviceHints {
        logical_cores: 8,
        constrained_device: false,
    }
}

fn params_with_fps(fps: f64) -> BackdropParams {
    BackdropParams {
        fps_override: Some(fps),
        ..Default::default()
    }
}

#[test]
fn construction_reports_frame_buffer_of_viewport_size() {
    let b = Backdrop::new(800, 600, desktop_hints(), BackdropParams::default(), 1);
    assert_eq!(b.tier(), Tier::Desktop);
    assert_eq!(b.surface_size(), Some((800, 600)));
    assert_eq!(b.frame_bytes().map(|f| f.len()), Some(800 * 600 * 4));
}

#[test]
fn degenerate_viewport_degrades_instead_of_failing() {
    let mut b = Backdrop::new(0, 600, desktop_hints(), BackdropParams::default(), 1);
    assert_eq!(b.frame_bytes(), None);
    assert_eq!(b.surface_size(), None);
    // the update cycle still runs; only painting is skipped
    assert!(b.pump(0.0));
    assert_eq!(b.frame_index(), 1);
}

#[test]
fn malformed_accent_falls_back_without_panicking() {
    let params = BackdropParams {
        accent: Some("definitely-not-hex".to_string()),
        ..Default::default()
    };
    let mut b = Backdrop::new(320, 240, desktop_hints(), params, 7);
    assert!(b.pump(0.0));
}

#[test]
fn pump_throttles_to_the_target_rate() {
    // 100 fps override -> 10ms minimum interval
    let mut b = Backdrop::new(64, 48, desktop_hints(), params_with_fps(100.0), 1);
    assert!(b.pump(0.0));
    assert!(!b.pump(5.0));
    assert!(b.pump(10.0));
    assert!(!b.pump(14.0));
    assert!(b.pump(25.0));
    assert_eq!(b.frame_index(), 3);
}

#[test]
fn resize_applies_only_after_the_burst_settles() {
    let mut b = Backdrop::new(1920, 1080, desktop_hints(), params_with_fps(1000.0), 1);
    b.resized(1200, 700, 0.0);
    b.resized(800, 600, 40.0);
    b.pump(100.0);
    assert_eq!(b.surface_size(), Some((1920, 1080)));
    b.pump(300.0);
    assert_eq!(b.surface_size(), Some((800, 600)));
}

#[test]
fn resizing_below_the_breakpoint_reclassifies_the_tier() {
    let mut b = Backdrop::new(1920, 1080, desktop_hints(), params_with_fps(1000.0), 1);
    assert_eq!(b.tier(), Tier::Desktop);
    b.resized(320, 480, 0.0);
    b.pump(500.0);
    assert_eq!(b.tier(), Tier::Mobile);
    assert_eq!(b.surface_size(), Some((320, 480)));
}

#[test]
fn camera_stays_at_rest_without_pointer_input() {
    let mut b = Backdrop::new(640, 480, desktop_hints(), params_with_fps(1000.0), 1);
    for i in 0..500 {
        b.pump(i as f64 * 2.0);
    }
    assert_eq!(b.camera_offset(), Vec2::ZERO);
}

#[test]
fn pointer_input_eases_the_camera_toward_its_target() {
    let mut b = Backdrop::new(640, 480, desktop_hints(), params_with_fps(1000.0), 1);
    b.pointer_moved(640.0, 480.0);
    let mut last = 0.0f32;
    for i in 1..200 {
        b.pump(i as f64 * 2.0);
        b.pointer_moved(640.0, 480.0);
        let now = b.camera_offset().x;
        assert!(now >= last, "camera moved backwards");
        last = now;
    }
    // bottom-right corner maps to half the parallax range on each axis
    assert!((b.camera_offset().x - 10.0).abs() < 0.1);
    assert!((b.camera_offset().y - 6.0).abs() < 0.1);
}

#[test]
fn same_seed_produces_identical_frames() {
    let mut a = Backdrop::new(96, 64, desktop_hints(), params_with_fps(1000.0), 42);
    let mut b = Backdrop::new(96, 64, desktop_hints(), params_with_fps(1000.0), 42);
    for i in 0..10 {
        let t = i as f64 * 2.0;
        a.scrolled(i as f32 * 50.0);
        b.scrolled(i as f32 * 50.0);
        a.pump(t);
        b.pump(t);
    }
    assert_eq!(a.frame_bytes(), b.frame_bytes());
}

#[test]
fn dispose_makes_every_entry_point_inert() {
    let mut b = Backdrop::new(320, 240, desktop_hints(), params_with_fps(1000.0), 1);
    assert!(b.pump(0.0));
    b.dispose();
    assert!(b.is_disposed());
    assert_eq!(b.frame_bytes(), None);
    // stale callbacks after teardown must be no-ops
    b.pointer_moved(10.0, 10.0);
    b.touch_moved(10.0, 10.0);
    b.scrolled(500.0);
    b.resized(64, 64, 5.0);
    assert!(!b.pump(1000.0));
    assert_eq!(b.frame_index(), 1);
    // disposing twice is fine
    b.dispose();
    assert!(b.is_disposed());
}
