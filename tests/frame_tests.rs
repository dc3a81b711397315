// Frame scheduler pacing under a synthetic clock, and cancellation.

use neon_backdrop::frame::{FrameClock, FrameScheduler, InstantClock};

#[test]
fn first_callback_is_accepted() {
    let mut s = FrameScheduler::new(60.0);
    assert!(s.should_render(0.0));
}

#[test]
fn never_accepts_two_renders_within_the_min_interval() {
    let mut s = FrameScheduler::new(60.0);
    let interval = s.min_interval_ms();
    let mut accepted = Vec::new();
    // raw callbacks every 4ms, far faster than the 60fps target
    let mut now = 0.0;
    while now < 2_000.0 {
        if s.should_render(now) {
            accepted.push(now);
        }
        now += 4.0;
    }
    assert!(accepted.len() > 10);
    for pair in accepted.windows(2) {
        assert!(
            pair[1] - pair[0] >= interval,
            "renders {} and {} closer than {}",
            pair[0],
            pair[1],
            interval
        );
    }
}

#[test]
fn throttle_bounds_maximum_rate_not_minimum() {
    let mut s = FrameScheduler::new(60.0);
    assert!(s.should_render(0.0));
    // a long gap (tab hidden) is fine; next callback is simply accepted
    assert!(s.should_render(5_000.0));
}

#[test]
fn lower_fps_means_longer_interval() {
    let desktop = FrameScheduler::new(60.0);
    let low = FrameScheduler::new(24.0);
    assert!(low.min_interval_ms() > desktop.min_interval_ms());
}

#[test]
fn cancel_latches() {
    let mut s = FrameScheduler::new(60.0);
    assert!(s.should_render(0.0));
    s.cancel();
    assert!(s.is_cancelled());
    for i in 0..100 {
        assert!(!s.should_render(1_000.0 + i as f64 * 100.0));
    }
}

#[test]
fn retuning_fps_preserves_cancellation() {
    let mut s = FrameScheduler::new(60.0);
    s.cancel();
    s.set_target_fps(24.0);
    assert!(!s.should_render(10_000.0));
}

#[test]
fn instant_clock_is_monotonic() {
    let clock = InstantClock::new();
    let a = clock.now_ms();
    let b = clock.now_ms();
    assert!(b >= a);
}
