//! Layered raster painting: one strictly ordered paint pass per frame.
//!
//! Layer order is fixed back-to-front (background, fog, grid, dust,
//! orbs, sparks, shapes, veil) and each variant's entities update in
//! array order before that variant paints, so output is deterministic
//! frame-to-frame. Tier and reduced-motion gates only ever skip whole
//! layers; they never reorder them.

use glam::Vec2;

pub mod color;
pub mod draw;
pub mod surface;

use self::color::{hsl_to_rgb, Rgb, BLACK};
use self::surface::PixelSurface;
use crate::constants::*;
use crate::profile::Tier;
use crate::scene::{SceneState, ShapeKind};

pub struct LayeredRenderer {
    background: Rgb,
    white: Rgb,
    reduced_motion: bool,
}

impl LayeredRenderer {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            background: BLACK,
            white: Rgb::new(1.0, 1.0, 1.0),
            reduced_motion,
        }
    }

    /// Paint one frame. Mutates the scene (entity motion) and the surface;
    /// nothing else.
    pub fn render_frame(
        &self,
        surface: &mut PixelSurface,
        scene: &mut SceneState,
        camera: Vec2,
        scroll_factor: f32,
        frame: u64,
    ) {
        let t = frame as f32;

        surface.fill(self.background);
        self.paint_fog(surface, t);
        if scene.tier.grid_enabled() {
            self.paint_grid(surface, t);
        }

        scene.advance_dust();
        self.paint_dust(surface, scene, t);

        scene.advance_orbs();
        self.paint_orbs(surface, scene);

        if !self.reduced_motion {
            scene.advance_sparks();
            self.paint_sparks(surface, scene);
        }

        scene.advance_shapes(frame, scroll_factor);
        self.paint_shapes(surface, scene, camera, t);

        surface.dim(VEIL_ALPHA);
    }

    /// Additive radial fog whose hue slowly oscillates with the frame
    /// index: a warm center stop blending through a shifted secondary hue
    /// into darkness at the rim.
    fn paint_fog(&self, surface: &mut PixelSurface, t: f32) {
        let w = surface.width() as f32;
        let h = surface.height() as f32;
        let cx = w / 2.0;
        let cy = h / 2.0;
        let radius = w.max(h);
        let hue = ((t * FOG_HUE_RATE).sin() * FOG_HUE_SWING + FOG_HUE_BASE).rem_euclid(360.0);
        let center = hsl_to_rgb(hue, 1.0, 0.6);
        let mid = hsl_to_rgb(hue + FOG_HUE_SECONDARY_OFFSET, 1.0, 0.5);
        for y in 0..surface.height() as i32 {
            let dy = y as f32 + 0.5 - cy;
            for x in 0..surface.width() as i32 {
                let dx = x as f32 + 0.5 - cx;
                let d = ((dx * dx + dy * dy).sqrt() / radius).min(1.0);
                let col = if d < 0.5 {
                    center.lerp(mid, d * 2.0)
                } else {
                    mid.lerp(BLACK, (d - 0.5) * 2.0)
                };
                surface.add_pixel(x, y, col, FOG_ALPHA);
            }
        }
    }

    /// Perspective floor: rails converging on a vanishing line plus
    /// horizontal rungs whose alpha pulses slowly.
    fn paint_grid(&self, surface: &mut PixelSurface, t: f32) {
        let w = surface.width() as f32;
        let h = surface.height() as f32;
        let vanish_y = h * GRID_VANISH_FRAC;
        let rail_color = Rgb::new(200.0 / 255.0, 1.0, 1.0);
        for i in -GRID_RAIL_HALF_COUNT..=GRID_RAIL_HALF_COUNT {
            let fi = i as f32;
            draw::stroke_line(
                surface,
                w / 2.0 + fi * GRID_RAIL_SPREAD_BOTTOM,
                h,
                w / 2.0 + fi * GRID_RAIL_SPREAD_VANISH,
                vanish_y,
                2.0,
                rail_color,
                GRID_RAIL_ALPHA,
            );
        }
        let rung_alpha =
            GRID_RUNG_ALPHA_BASE + GRID_RUNG_ALPHA_SWING * (t * GRID_RUNG_PULSE_RATE).sin();
        let mut y = vanish_y;
        while y < h {
            draw::stroke_line(surface, 0.0, y, w, y, 1.0, self.white, rung_alpha);
            y += GRID_RUNG_SPACING;
        }
    }

    fn paint_dust(&self, surface: &mut PixelSurface, scene: &SceneState, t: f32) {
        let twinkle_on = scene.tier != Tier::Low && !self.reduced_motion;
        for d in &scene.dust {
            let alpha = if twinkle_on {
                d.alpha * (1.0 - DUST_TWINKLE_DEPTH
                    + DUST_TWINKLE_DEPTH * (t * DUST_TWINKLE_RATE + d.twinkle_phase).sin())
            } else {
                d.alpha
            };
            draw::fill_disc(surface, d.x, d.y, d.radius, self.white, alpha);
        }
    }

    fn paint_orbs(&self, surface: &mut PixelSurface, scene: &SceneState) {
        let trails = scene.tier.trails_enabled();
        for o in &scene.orbs {
            let col = hsl_to_rgb(o.hue, 0.8, 0.6);
            if trails {
                for (i, &(tx, ty)) in o.trail.iter().enumerate() {
                    let fade = ORB_TRAIL_ALPHA * (1.0 - i as f32 / ORB_TRAIL_LEN as f32);
                    draw::soft_disc(surface, tx, ty, o.radius * 0.8, col, fade);
                }
            }
            draw::soft_disc(surface, o.x, o.y, o.radius, col, 1.0);
        }
    }

    fn paint_sparks(&self, surface: &mut PixelSurface, scene: &SceneState) {
        for s in &scene.sparks {
            let alpha = s.life as f32 / s.max_life as f32;
            draw::soft_disc(surface, s.x, s.y, SPARK_RADIUS * 2.0, self.white, alpha);
        }
    }

    /// Outlined glyphs with a glow halo; parallax translation scales with
    /// each shape's depth so near shapes track the pointer harder.
    fn paint_shapes(&self, surface: &mut PixelSurface, scene: &SceneState, camera: Vec2, t: f32) {
        let pulse = if self.reduced_motion {
            0.0
        } else {
            ((t * GLOW_PULSE_RATE).sin() + 1.0) * GLOW_PULSE_GAIN
        };
        for s in &scene.shapes {
            let sx = s.x + camera.x * s.depth * PARALLAX_GAIN_X;
            let sy = s.y + camera.y * s.depth * PARALLAX_GAIN_Y;
            let size = s.size + (t * SHAPE_BREATH_RATE + s.phase).sin() * SHAPE_BREATH_AMPLITUDE;
            let half = size / 2.0;
            let blur = s.glow + pulse * GLOW_PULSE_BLUR_WEIGHT;

            draw::soft_disc(surface, sx, sy, half + blur, s.color, 0.25);

            match s.kind {
                ShapeKind::Circle => {
                    draw::stroke_circle(surface, sx, sy, half, SHAPE_LINE_WIDTH, s.color, 1.0);
                }
                ShapeKind::Triangle => {
                    let pts = [
                        draw::rotated(sx, sy, 0.0, -half, s.rot),
                        draw::rotated(sx, sy, half, half, s.rot),
                        draw::rotated(sx, sy, -half, half, s.rot),
                    ];
                    draw::stroke_polygon(surface, &pts, SHAPE_LINE_WIDTH, s.color, 1.0);
                }
                ShapeKind::Square => {
                    let pts = [
                        draw::rotated(sx, sy, -half, -half, s.rot),
                        draw::rotated(sx, sy, half, -half, s.rot),
                        draw::rotated(sx, sy, half, half, s.rot),
                        draw::rotated(sx, sy, -half, half, s.rot),
                    ];
                    draw::stroke_polygon(surface, &pts, SHAPE_LINE_WIDTH, s.color, 1.0);
                }
            }
        }
    }
}
