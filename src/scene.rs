//! Scene state: the fixed entity populations and their per-tick motion.
//!
//! Populations are allocated once per (tier, viewport) and recycled in
//! place: an entity leaving the visible bounds is repositioned, never
//! dropped or reallocated, so a long-running loop allocates nothing.
//! Shape kind and color are assigned round-robin by index to keep the
//! visual balance deterministic; everything else is drawn from a seeded
//! RNG so initialization is reproducible.

use rand::prelude::*;

use crate::constants::*;
use crate::profile::Tier;
use crate::render::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
}

pub const SHAPE_KINDS: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Square];

/// Large outlined glyph drifting upward with rotation and sway.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub depth: f32,
    pub rot: f32,
    pub rot_speed: f32,
    pub sway: f32,
    pub phase: f32,
    pub color: Rgb,
    pub glow: f32,
}

/// Tiny rising mote.
#[derive(Clone, Copy, Debug)]
pub struct Dust {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub rise_speed: f32,
    pub alpha: f32,
    pub drift: f32,
    pub twinkle_phase: f32,
}

/// Falling colored marble with a short trail of previous positions
/// (index 0 is the most recent).
#[derive(Clone, Copy, Debug)]
pub struct Orb {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub fall_speed: f32,
    pub hue: f32,
    pub drift: f32,
    pub trail: [(f32, f32); ORB_TRAIL_LEN],
}

/// Finite-lifetime ember; respawns at a fresh position when it expires.
#[derive(Clone, Copy, Debug)]
pub struct Spark {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: u32,
    pub max_life: u32,
}

pub struct SceneState {
    pub tier: Tier,
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
    pub dust: Vec<Dust>,
    pub orbs: Vec<Orb>,
    pub sparks: Vec<Spark>,
    rng: StdRng,
}

impl SceneState {
    /// Allocate the full entity set for a tier and viewport.
    ///
    /// Per-variant RNGs are derived from the base seed so the parameters of
    /// one population do not shift when another population's count changes.
    pub fn initialize(tier: Tier, width: f32, height: f32, palette: [Rgb; 3], seed: u64) -> Self {
        let mix = |i: u64| seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut shape_rng = StdRng::seed_from_u64(mix(1));
        let mut dust_rng = StdRng::seed_from_u64(mix(2));
        let mut orb_rng = StdRng::seed_from_u64(mix(3));
        let mut spark_rng = StdRng::seed_from_u64(mix(4));

        let shapes = (0..tier.shape_count())
            .map(|i| make_shape(i, &mut shape_rng, width, height, &palette))
            .collect();
        let dust = (0..tier.dust_count())
            .map(|_| make_dust(&mut dust_rng, width, height))
            .collect();
        let orbs = (0..tier.orb_count())
            .map(|_| make_orb(&mut orb_rng, width, height))
            .collect();
        let sparks = (0..tier.spark_count())
            .map(|_| make_spark(&mut spark_rng, width, height))
            .collect();

        Self {
            tier,
            width,
            height,
            shapes,
            dust,
            orbs,
            sparks,
            rng: StdRng::seed_from_u64(mix(5)),
        }
    }

    /// Advance dust one tick: rise, drift, wrap at the top edge.
    pub fn advance_dust(&mut self) {
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        for d in &mut self.dust {
            d.y -= d.rise_speed;
            d.x += d.drift;
            d.x = wrap_axis(d.x, w, DUST_WRAP_MARGIN);
            if d.y < -DUST_WRAP_MARGIN {
                d.y = h + DUST_WRAP_MARGIN;
                d.x = rng.gen::<f32>() * w;
            }
        }
    }

    /// Advance orbs one tick: fall, drift, wrap at the bottom edge.
    /// The trail resets on wrap so no streak spans the whole viewport.
    pub fn advance_orbs(&mut self) {
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        for o in &mut self.orbs {
            for i in (1..ORB_TRAIL_LEN).rev() {
                o.trail[i] = o.trail[i - 1];
            }
            o.trail[0] = (o.x, o.y);
            o.y += o.fall_speed;
            o.x += o.drift;
            o.x = wrap_axis(o.x, w, o.radius);
            if o.y > h + o.radius {
                o.y = -o.radius;
                o.x = rng.gen::<f32>() * w;
                o.trail = [(o.x, o.y); ORB_TRAIL_LEN];
            }
        }
    }

    /// Advance sparks one tick; expired or escaped sparks respawn in place.
    pub fn advance_sparks(&mut self) {
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        for s in &mut self.sparks {
            s.x += s.vx;
            s.y += s.vy;
            s.life = s.life.saturating_sub(1);
            let escaped = s.x < -SPARK_MARGIN
                || s.x > w + SPARK_MARGIN
                || s.y < -SPARK_MARGIN
                || s.y > h + SPARK_MARGIN;
            if s.life == 0 || escaped {
                *s = make_spark(rng, w, h);
            }
        }
    }

    /// Advance shapes one tick: rise scaled by speed, depth and the page
    /// scroll factor; rotate; sway horizontally on a phase-offset sine.
    pub fn advance_shapes(&mut self, frame: u64, scroll_factor: f32) {
        let (w, h) = (self.width, self.height);
        let sway_t = frame as f32 * SHAPE_SWAY_RATE;
        let rng = &mut self.rng;
        for s in &mut self.shapes {
            s.y -= (s.speed + scroll_factor * SCROLL_DRIFT_GAIN) * s.depth;
            s.rot += s.rot_speed;
            s.x += (sway_t + s.phase).sin() * (SHAPE_SWAY_GAIN * s.sway);
            s.x = wrap_axis(s.x, w, s.size);
            if s.y < -s.size {
                s.y = h + s.size;
                s.x = rng.gen::<f32>() * w;
            }
        }
    }
}

fn make_shape(index: usize, rng: &mut StdRng, w: f32, h: f32, palette: &[Rgb; 3]) -> Shape {
    Shape {
        kind: SHAPE_KINDS[index % SHAPE_KINDS.len()],
        x: rng.gen::<f32>() * w,
        y: rng.gen::<f32>() * h,
        size: rng.gen_range(SHAPE_SIZE_MIN..SHAPE_SIZE_MAX),
        speed: rng.gen_range(SHAPE_SPEED_MIN..SHAPE_SPEED_MAX),
        depth: rng.gen_range(SHAPE_DEPTH_MIN..SHAPE_DEPTH_MAX),
        rot: rng.gen::<f32>() * std::f32::consts::PI,
        rot_speed: rng.gen_range(-SHAPE_ROT_SPEED_MAX..SHAPE_ROT_SPEED_MAX),
        sway: rng.gen_range(SHAPE_SWAY_MIN..SHAPE_SWAY_MAX),
        phase: rng.gen::<f32>() * std::f32::consts::TAU,
        color: palette[index % palette.len()],
        glow: rng.gen_range(SHAPE_GLOW_MIN..SHAPE_GLOW_MAX),
    }
}

fn make_dust(rng: &mut StdRng, w: f32, h: f32) -> Dust {
    Dust {
        x: rng.gen::<f32>() * w,
        y: rng.gen::<f32>() * h,
        radius: rng.gen_range(DUST_RADIUS_MIN..DUST_RADIUS_MAX),
        rise_speed: rng.gen_range(DUST_RISE_MIN..DUST_RISE_MAX),
        alpha: rng.gen_range(DUST_ALPHA_MIN..DUST_ALPHA_MAX),
        drift: rng.gen_range(-DUST_DRIFT_MAX..DUST_DRIFT_MAX),
        twinkle_phase: rng.gen::<f32>() * std::f32::consts::TAU,
    }
}

fn make_orb(rng: &mut StdRng, w: f32, h: f32) -> Orb {
    let x = rng.gen::<f32>() * w;
    let y = rng.gen::<f32>() * h;
    Orb {
        x,
        y,
        radius: rng.gen_range(ORB_RADIUS_MIN..ORB_RADIUS_MAX),
        fall_speed: rng.gen_range(ORB_FALL_MIN..ORB_FALL_MAX),
        hue: rng.gen::<f32>() * 360.0,
        drift: rng.gen_range(-ORB_DRIFT_MAX..ORB_DRIFT_MAX),
        trail: [(x, y); ORB_TRAIL_LEN],
    }
}

fn make_spark(rng: &mut StdRng, w: f32, h: f32) -> Spark {
    let max_life = rng.gen_range(SPARK_LIFE_MIN..=SPARK_LIFE_MAX);
    Spark {
        x: rng.gen::<f32>() * w,
        y: rng.gen::<f32>() * h,
        vx: rng.gen_range(-SPARK_SPEED_MAX..SPARK_SPEED_MAX),
        vy: rng.gen_range(-SPARK_SPEED_MAX..SPARK_SPEED_MAX),
        life: max_life,
        max_life,
    }
}

/// Re-enter from the opposite edge once a coordinate leaves
/// `[-margin, bound + margin]`.
#[inline]
fn wrap_axis(v: f32, bound: f32, margin: f32) -> f32 {
    if v < -margin {
        bound + margin
    } else if v > bound + margin {
        -margin
    } else {
        v
    }
}
