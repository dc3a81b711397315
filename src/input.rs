//! Pointer/touch/scroll sampling, decoupled from any event system.
//!
//! The host forwards raw deliveries whenever they arrive; the sampler
//! coalesces them and only commits derived values (parallax target,
//! scroll factor) once per accepted frame, so heavy work never runs
//! synchronously inside an event handler. After `detach()` every
//! delivery is ignored, which makes stale callbacks harmless.

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::*;

/// Which input channels the host managed to attach. A channel that failed
/// to register just means reduced interactivity, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelSet {
    pub pointer: bool,
    pub touch: bool,
    pub scroll: bool,
}

impl ChannelSet {
    pub fn all() -> Self {
        Self {
            pointer: true,
            touch: true,
            scroll: true,
        }
    }

    pub fn none() -> Self {
        Self {
            pointer: false,
            touch: false,
            scroll: false,
        }
    }

    pub fn any(&self) -> bool {
        self.pointer || self.touch || self.scroll
    }
}

pub struct InputSampler {
    viewport: Vec2,
    pending: SmallVec<[Vec2; POINTER_PENDING_CAP]>,
    raw_scroll_y: f32,
    scroll_dirty: bool,
    target_offset: Vec2,
    scroll_factor: f32,
    detached: bool,
}

impl InputSampler {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport: Vec2::new(viewport_width.max(1.0), viewport_height.max(1.0)),
            pending: SmallVec::new(),
            raw_scroll_y: 0.0,
            scroll_dirty: false,
            target_offset: Vec2::ZERO,
            scroll_factor: 0.0,
            detached: false,
        }
    }

    /// Record a pointer position in viewport coordinates. Multiple
    /// deliveries between frames coalesce; only the most recent few are
    /// kept and averaged at commit time.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.detached {
            return;
        }
        if self.pending.len() == POINTER_PENDING_CAP {
            self.pending.remove(0);
        }
        self.pending.push(Vec2::new(x, y));
    }

    /// Touch deliveries share the pointer path.
    pub fn touch_moved(&mut self, x: f32, y: f32) {
        self.pointer_moved(x, y);
    }

    /// Record the raw page scroll position. The factor is recomputed at
    /// commit time, never synchronously per event.
    pub fn scrolled(&mut self, scroll_y: f32) {
        if self.detached {
            return;
        }
        self.raw_scroll_y = scroll_y;
        self.scroll_dirty = true;
    }

    /// Fold pending deliveries into the derived values. Called once per
    /// accepted frame by the render loop.
    pub fn commit(&mut self) {
        if self.detached {
            return;
        }
        if !self.pending.is_empty() {
            let sum: Vec2 = self.pending.iter().copied().sum();
            let avg = sum / self.pending.len() as f32;
            self.target_offset = Vec2::new(
                (avg.x / self.viewport.x - 0.5) * POINTER_RANGE_X,
                (avg.y / self.viewport.y - 0.5) * POINTER_RANGE_Y,
            );
            self.pending.clear();
        }
        if self.scroll_dirty {
            self.scroll_factor =
                (self.raw_scroll_y.max(0.0) / SCROLL_FACTOR_DIVISOR).min(SCROLL_FACTOR_MAX);
            self.scroll_dirty = false;
        }
    }

    pub fn target_offset(&self) -> Vec2 {
        self.target_offset
    }

    pub fn scroll_factor(&self) -> f32 {
        self.scroll_factor
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Single teardown point: every later delivery is a no-op.
    pub fn detach(&mut self) {
        self.detached = true;
        self.pending.clear();
        self.scroll_dirty = false;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}
