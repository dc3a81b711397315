//! Eased camera offset feeding the shape parallax.

use glam::Vec2;

use crate::constants::POINTER_EASE;

/// Exponentially smoothed 2D offset. The offset is never set directly:
/// each step moves a fixed fraction of the remaining distance toward the
/// target, so `|offset - target|` contracts monotonically and never
/// overshoots.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothedOffset {
    current: Vec2,
}

impl SmoothedOffset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, target: Vec2) {
        self.current += (target - self.current) * POINTER_EASE;
    }

    pub fn get(&self) -> Vec2 {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = Vec2::ZERO;
    }
}
