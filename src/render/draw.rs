//! Scalar 2D drawing primitives over the pixel surface.
//!
//! Everything here iterates the primitive's bounding box and blends per
//! pixel; callers pass viewport-space f32 coordinates. Strokes are
//! distance-band tests rather than path tracing, which keeps the outlines
//! watertight under rotation.

use super::color::Rgb;
use super::surface::PixelSurface;

/// Solid disc with a hard edge.
pub fn fill_disc(surface: &mut PixelSurface, cx: f32, cy: f32, radius: f32, color: Rgb, alpha: f32) {
    let r = radius.max(0.0);
    let (x0, y0, x1, y1) = bounds(cx, cy, r);
    let r2 = r * r;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                surface.blend_pixel(x, y, color, alpha);
            }
        }
    }
}

/// Disc whose alpha falls off linearly toward the rim. Used for orbs,
/// sparks, and glow halos.
pub fn soft_disc(surface: &mut PixelSurface, cx: f32, cy: f32, radius: f32, color: Rgb, alpha: f32) {
    let r = radius.max(0.0);
    if r <= 0.0 {
        return;
    }
    let (x0, y0, x1, y1) = bounds(cx, cy, r);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let d = (dx * dx + dy * dy).sqrt();
            if d < r {
                surface.blend_pixel(x, y, color, alpha * (1.0 - d / r));
            }
        }
    }
}

/// Outlined circle: a band of `line_width` centered on the radius.
pub fn stroke_circle(
    surface: &mut PixelSurface,
    cx: f32,
    cy: f32,
    radius: f32,
    line_width: f32,
    color: Rgb,
    alpha: f32,
) {
    let r = radius.max(0.0);
    let half = line_width.max(0.5) * 0.5;
    let (x0, y0, x1, y1) = bounds(cx, cy, r + half);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let d = (dx * dx + dy * dy).sqrt();
            let band = (d - r).abs();
            if band <= half {
                // soften the outermost half-pixel
                let edge = ((half - band) / 0.5).clamp(0.0, 1.0);
                surface.blend_pixel(x, y, color, alpha * edge);
            }
        }
    }
}

/// Straight stroke between two points, sampled once per pixel of length.
pub fn stroke_line(
    surface: &mut PixelSurface,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    line_width: f32,
    color: Rgb,
    alpha: f32,
) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len = (dx * dx + dy * dy).sqrt();
    if len < f32::EPSILON {
        fill_disc(surface, x0, y0, line_width * 0.5, color, alpha);
        return;
    }
    let steps = len.ceil() as i32;
    let half = (line_width.max(1.0) * 0.5).ceil() as i32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let px = x0 + dx * t;
        let py = y0 + dy * t;
        if line_width <= 1.0 {
            surface.blend_pixel(px.round() as i32, py.round() as i32, color, alpha);
        } else {
            for oy in -half..=half {
                for ox in -half..=half {
                    if (ox * ox + oy * oy) as f32 <= (line_width * 0.5) * (line_width * 0.5) {
                        surface.blend_pixel(
                            px.round() as i32 + ox,
                            py.round() as i32 + oy,
                            color,
                            alpha,
                        );
                    }
                }
            }
        }
    }
}

/// Outlined polygon through rotated vertices; closes the loop itself.
pub fn stroke_polygon(
    surface: &mut PixelSurface,
    points: &[(f32, f32)],
    line_width: f32,
    color: Rgb,
    alpha: f32,
) {
    if points.len() < 2 {
        return;
    }
    for i in 0..points.len() {
        let (ax, ay) = points[i];
        let (bx, by) = points[(i + 1) % points.len()];
        stroke_line(surface, ax, ay, bx, by, line_width, color, alpha);
    }
}

/// Rotate `(x, y)` about the origin by `rot` radians and translate to
/// `(cx, cy)`.
#[inline]
pub fn rotated(cx: f32, cy: f32, x: f32, y: f32, rot: f32) -> (f32, f32) {
    let (s, c) = rot.sin_cos();
    (cx + x * c - y * s, cy + x * s + y * c)
}

#[inline]
fn bounds(cx: f32, cy: f32, r: f32) -> (i32, i32, i32, i32) {
    (
        (cx - r).floor() as i32,
        (cy - r).floor() as i32,
        (cx + r).ceil() as i32,
        (cy + r).ceil() as i32,
    )
}
