//! Capability-tier classification from structured environment hints.
//!
//! The host supplies what it knows (viewport width, logical core count, a
//! coarse "constrained device" signal) and the classifier maps that to a
//! discrete tier. Tier policy (entity counts, pacing, feature toggles)
//! lives here next to the classifier so a tier change is one lookup away.

use crate::constants::*;

/// Discrete performance class governing entity counts and feature toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Low,
    Mobile,
    Desktop,
}

/// Structured environment hints supplied by the host on mount and resize.
#[derive(Clone, Copy, Debug)]
pub struct EnvProbe {
    /// Viewport width in CSS/logical pixels.
    pub viewport_width: f32,
    /// Logical processor count hint; 0 means unknown.
    pub logical_cores: u32,
    /// Coarse "this looks like a constrained device" signal from the host.
    pub constrained_device: bool,
}

/// Pure tier mapping. Same inputs always produce the same tier.
///
/// A very low core count wins over everything: a wide viewport on a weak
/// machine still gets the cheap scene.
pub fn classify(probe: &EnvProbe) -> Tier {
    if probe.logical_cores != 0 && probe.logical_cores <= LOW_CORE_THRESHOLD {
        return Tier::Low;
    }
    if probe.constrained_device || probe.viewport_width < MOBILE_BREAKPOINT_PX {
        return Tier::Mobile;
    }
    Tier::Desktop
}

impl Tier {
    pub fn shape_count(self) -> usize {
        match self {
            Tier::Desktop => SHAPE_COUNT_DESKTOP,
            Tier::Mobile => SHAPE_COUNT_MOBILE,
            Tier::Low => SHAPE_COUNT_LOW,
        }
    }

    pub fn dust_count(self) -> usize {
        match self {
            Tier::Desktop => DUST_COUNT_DESKTOP,
            Tier::Mobile => DUST_COUNT_MOBILE,
            Tier::Low => DUST_COUNT_LOW,
        }
    }

    /// Orbs are dropped entirely on the low tier.
    pub fn orb_count(self) -> usize {
        match self {
            Tier::Desktop => ORB_COUNT_DESKTOP,
            Tier::Mobile => ORB_COUNT_MOBILE,
            Tier::Low => 0,
        }
    }

    /// Sparks are dropped entirely on the low tier.
    pub fn spark_count(self) -> usize {
        match self {
            Tier::Desktop => SPARK_COUNT_DESKTOP,
            Tier::Mobile => SPARK_COUNT_MOBILE,
            Tier::Low => 0,
        }
    }

    pub fn target_fps(self) -> f64 {
        match self {
            Tier::Desktop => TARGET_FPS_DESKTOP,
            Tier::Mobile => TARGET_FPS_MOBILE,
            Tier::Low => TARGET_FPS_LOW,
        }
    }

    /// The perspective grid overlay is skipped entirely on the low tier.
    pub fn grid_enabled(self) -> bool {
        self != Tier::Low
    }

    /// Orb trails are a desktop-only nicety.
    pub fn trails_enabled(self) -> bool {
        self == Tier::Desktop
    }
}

/// Collapses a burst of resize events into one reinitialization.
///
/// The host notes every raw resize; the engine polls once per frame and
/// applies the latest dimensions only after the burst has gone quiet for
/// the debounce window.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResizeDebouncer {
    pending: Option<(u32, u32)>,
    deadline_ms: f64,
}

impl ResizeDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(&mut self, width: u32, height: u32, now_ms: f64) {
        self.pending = Some((width, height));
        self.deadline_ms = now_ms + RESIZE_DEBOUNCE_MS;
    }

    /// Returns the settled dimensions once the debounce window has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<(u32, u32)> {
        if self.pending.is_some() && now_ms >= self.deadline_ms {
            return self.pending.take();
        }
        None
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
