//! Scene and interaction tuning constants.
//!
//! These constants express intended behavior (counts, rates, clamp limits)
//! and keep magic numbers out of the code. The tier tables are policy, not
//! contract: the classifier picks a tier, the tables decide what it buys.

// Capability classification
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const LOW_CORE_THRESHOLD: u32 = 2;
pub const RESIZE_DEBOUNCE_MS: f64 = 150.0;

// Entity counts per tier (desktop / mobile / low)
pub const SHAPE_COUNT_DESKTOP: usize = 18;
pub const SHAPE_COUNT_MOBILE: usize = 10;
pub const SHAPE_COUNT_LOW: usize = 6;

pub const DUST_COUNT_DESKTOP: usize = 90;
pub const DUST_COUNT_MOBILE: usize = 45;
pub const DUST_COUNT_LOW: usize = 24;

pub const ORB_COUNT_DESKTOP: usize = 12;
pub const ORB_COUNT_MOBILE: usize = 6;

pub const SPARK_COUNT_DESKTOP: usize = 24;
pub const SPARK_COUNT_MOBILE: usize = 10;

// Frame pacing per tier
pub const TARGET_FPS_DESKTOP: f64 = 60.0;
pub const TARGET_FPS_MOBILE: f64 = 30.0;
pub const TARGET_FPS_LOW: f64 = 24.0;

// Shape motion (viewport px per frame unless noted)
pub const SHAPE_SIZE_MIN: f32 = 40.0;
pub const SHAPE_SIZE_MAX: f32 = 90.0;
pub const SHAPE_SPEED_MIN: f32 = 0.2;
pub const SHAPE_SPEED_MAX: f32 = 0.8;
pub const SHAPE_DEPTH_MIN: f32 = 0.5;
pub const SHAPE_DEPTH_MAX: f32 = 2.2;
pub const SHAPE_ROT_SPEED_MAX: f32 = 0.003; // radians per frame, symmetric
pub const SHAPE_GLOW_MIN: f32 = 8.0;
pub const SHAPE_GLOW_MAX: f32 = 22.0;
pub const SHAPE_SWAY_MIN: f32 = 0.4;
pub const SHAPE_SWAY_MAX: f32 = 1.8;
pub const SHAPE_SWAY_GAIN: f32 = 0.2;
pub const SHAPE_SWAY_RATE: f32 = 0.008; // phase advance per frame
pub const SHAPE_BREATH_RATE: f32 = 0.015;
pub const SHAPE_BREATH_AMPLITUDE: f32 = 2.0;
pub const SHAPE_LINE_WIDTH: f32 = 3.0;

// Glow pulse shared by all shapes
pub const GLOW_PULSE_RATE: f32 = 0.06;
pub const GLOW_PULSE_GAIN: f32 = 6.0;
pub const GLOW_PULSE_BLUR_WEIGHT: f32 = 0.5;

// Scroll coupling into shape drift
pub const SCROLL_DRIFT_GAIN: f32 = 0.4;

// Dust
pub const DUST_RADIUS_MIN: f32 = 0.5;
pub const DUST_RADIUS_MAX: f32 = 1.5;
pub const DUST_RISE_MIN: f32 = 0.1;
pub const DUST_RISE_MAX: f32 = 0.3;
pub const DUST_ALPHA_MIN: f32 = 0.15;
pub const DUST_ALPHA_MAX: f32 = 0.4;
pub const DUST_DRIFT_MAX: f32 = 0.1; // symmetric horizontal noise
pub const DUST_WRAP_MARGIN: f32 = 2.0;
pub const DUST_TWINKLE_RATE: f32 = 0.05;
pub const DUST_TWINKLE_DEPTH: f32 = 0.25; // fraction of base alpha

// Orbs
pub const ORB_RADIUS_MIN: f32 = 4.0;
pub const ORB_RADIUS_MAX: f32 = 8.0;
pub const ORB_FALL_MIN: f32 = 0.25;
pub const ORB_FALL_MAX: f32 = 0.5;
pub const ORB_DRIFT_MAX: f32 = 0.15;
pub const ORB_TRAIL_LEN: usize = 4;
pub const ORB_TRAIL_ALPHA: f32 = 0.25;

// Sparks
pub const SPARK_LIFE_MIN: u32 = 40; // frames
pub const SPARK_LIFE_MAX: u32 = 140;
pub const SPARK_SPEED_MAX: f32 = 0.6;
pub const SPARK_RADIUS: f32 = 1.2;
pub const SPARK_MARGIN: f32 = 4.0;

// Pointer -> parallax target mapping (normalized pointer, px of offset)
pub const POINTER_RANGE_X: f32 = 20.0;
pub const POINTER_RANGE_Y: f32 = 12.0;
pub const POINTER_EASE: f32 = 0.06; // blend toward target per frame
pub const PARALLAX_GAIN_X: f32 = 0.6;
pub const PARALLAX_GAIN_Y: f32 = 0.5;
pub const POINTER_PENDING_CAP: usize = 4; // coalesced samples kept per frame

// Scroll factor
pub const SCROLL_FACTOR_MAX: f32 = 2.0;
pub const SCROLL_FACTOR_DIVISOR: f32 = 600.0;

// Fog layer
pub const FOG_HUE_RATE: f32 = 0.002;
pub const FOG_HUE_SWING: f32 = 20.0;
pub const FOG_HUE_BASE: f32 = 340.0;
pub const FOG_HUE_SECONDARY_OFFSET: f32 = 100.0;
pub const FOG_ALPHA: f32 = 0.08;

// Perspective grid
pub const GRID_VANISH_FRAC: f32 = 0.55; // vanishing line as fraction of height
pub const GRID_RAIL_HALF_COUNT: i32 = 5; // rails drawn for -n..=n
pub const GRID_RAIL_SPREAD_BOTTOM: f32 = 100.0;
pub const GRID_RAIL_SPREAD_VANISH: f32 = 20.0;
pub const GRID_RUNG_SPACING: f32 = 50.0;
pub const GRID_RAIL_ALPHA: f32 = 0.25;
pub const GRID_RUNG_ALPHA_BASE: f32 = 0.15;
pub const GRID_RUNG_ALPHA_SWING: f32 = 0.05;
pub const GRID_RUNG_PULSE_RATE: f32 = 0.02;

// Closing veil
pub const VEIL_ALPHA: f32 = 0.2;

// Default palette anchors
pub const DEFAULT_ACCENT_HEX: &str = "#FF0050";
pub const PALETTE_GREEN_HEX: &str = "#00FF87";
pub const PALETTE_WHITE_HEX: &str = "#FFFFFF";
