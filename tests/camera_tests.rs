// Camera offset smoothing: strict contraction, no overshoot, no drift.

use glam::Vec2;
use neon_backdrop::camera::SmoothedOffset;

#[test]
fn contracts_monotonically_toward_constant_target() {
    let target = Vec2::new(12.0, -7.0);
    let mut cam = SmoothedOffset::new();
    let mut prev = (target - cam.get()).length();
    for _ in 0..500 {
        cam.step(target);
        let dist = (target - cam.get()).length();
        assert!(dist <= prev + 1e-5, "distance grew: {prev} -> {dist}");
        prev = dist;
    }
    assert!(prev < 1e-3, "did not converge: {prev}");
}

#[test]
fn never_overshoots_past_target() {
    let target = Vec2::new(20.0, 12.0);
    let mut cam = SmoothedOffset::new();
    for _ in 0..2_000 {
        cam.step(target);
        let v = cam.get();
        assert!(v.x <= target.x + 1e-4 && v.y <= target.y + 1e-4);
        assert!(v.x >= 0.0 && v.y >= 0.0);
    }
}

#[test]
fn no_drift_without_input() {
    let mut cam = SmoothedOffset::new();
    for _ in 0..10_000 {
        cam.step(Vec2::ZERO);
    }
    assert_eq!(cam.get(), Vec2::ZERO);
}

#[test]
fn reset_returns_to_rest() {
    let mut cam = SmoothedOffset::new();
    cam.step(Vec2::new(5.0, 5.0));
    assert_ne!(cam.get(), Vec2::ZERO);
    cam.reset();
    assert_eq!(cam.get(), Vec2::ZERO);
}

#[test]
fn tracks_a_moving_target_without_snapping() {
    let mut cam = SmoothedOffset::new();
    cam.step(Vec2::new(10.0, 0.0));
    let after_one = cam.get().x;
    assert!(after_one > 0.0 && after_one < 10.0, "snap or stall: {after_one}");
}
