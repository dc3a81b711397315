//! Frame pacing: a throttle over the host's animation-frame callbacks.
//!
//! The host drives the loop with whatever frame primitive it has
//! (requestAnimationFrame, a winit redraw, a test loop) and calls in with
//! a timestamp; the scheduler decides whether that callback gets a full
//! update+render cycle. Throttling bounds the maximum rate; it never
//! promises a minimum. Cancellation is a latch: once cancelled, no later
//! callback is accepted, so an in-flight callback cannot touch a surface
//! that teardown already dropped.

use instant::Instant;

/// Millisecond clock behind the real-time path; tests inject their own.
pub trait FrameClock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from construction. `instant` keeps this working on
/// both native and wasm targets.
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FrameScheduler {
    min_interval_ms: f64,
    last_accepted_ms: Option<f64>,
    cancelled: bool,
}

impl FrameScheduler {
    pub fn new(target_fps: f64) -> Self {
        Self {
            min_interval_ms: 1000.0 / target_fps.max(1.0),
            last_accepted_ms: None,
            cancelled: false,
        }
    }

    /// Accept this callback for a full render cycle?
    ///
    /// True iff not cancelled and at least `1000 / target_fps` ms have
    /// passed since the last accepted callback. The first callback after
    /// construction (or after a rate change) is always accepted.
    pub fn should_render(&mut self, now_ms: f64) -> bool {
        if self.cancelled {
            return false;
        }
        match self.last_accepted_ms {
            Some(last) if now_ms - last < self.min_interval_ms => false,
            _ => {
                self.last_accepted_ms = Some(now_ms);
                true
            }
        }
    }

    /// Retune the throttle (tier change on resize). Keeps the cancelled
    /// latch but forgets pacing history.
    pub fn set_target_fps(&mut self, target_fps: f64) {
        self.min_interval_ms = 1000.0 / target_fps.max(1.0);
        self.last_accepted_ms = None;
    }

    pub fn min_interval_ms(&self) -> f64 {
        self.min_interval_ms
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
