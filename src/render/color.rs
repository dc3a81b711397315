//! Color helpers for the raster painter.
//!
//! Colors are linear-free sRGB floats in [0, 1]; the surface packs them to
//! `0xAARRGGBB` on write. Hue math mirrors the CSS `hsl()` the visual
//! design was specified in.

use crate::constants::{DEFAULT_ACCENT_HEX, PALETTE_GREEN_HEX, PALETTE_WHITE_HEX};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

pub const BLACK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn scaled(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

/// Parse a `#RRGGBB` (or `#RGB`) hex string.
pub fn parse_hex(s: &str) -> Option<Rgb> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let (r, g, b) = match hex.len() {
        6 => (
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        ),
        3 => {
            let d = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
            (d(0).ok()?, d(1).ok()?, d(2).ok()?)
        }
        _ => return None,
    };
    Some(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

/// CSS-style HSL to RGB. Hue in degrees (any range), s and l in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Rgb::new(r1 + m, g1 + m, b1 + m)
}

/// The fixed three-color palette: host accent, neon green, white glow.
/// Shape colors are assigned round-robin from this set by entity index.
pub fn palette(accent: Rgb) -> [Rgb; 3] {
    [
        accent,
        parse_hex(PALETTE_GREEN_HEX).unwrap_or(Rgb::new(0.0, 1.0, 0.53)),
        parse_hex(PALETTE_WHITE_HEX).unwrap_or(Rgb::new(1.0, 1.0, 1.0)),
    ]
}

/// Default accent used when the host supplies none (or a malformed value).
pub fn default_accent() -> Rgb {
    parse_hex(DEFAULT_ACCENT_HEX).unwrap_or(Rgb::new(1.0, 0.0, 0.31))
}
