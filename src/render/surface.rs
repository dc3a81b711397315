//! CPU raster surface the layered painter draws into.
//!
//! Pixels are packed `0xAARRGGBB`, alpha always opaque; the host blits the
//! buffer as raw bytes. When the surface cannot be acquired (degenerate
//! viewport) the engine keeps running and simply skips painting.

use thiserror::Error;

use super::color::Rgb;

/// Caps the surface at 8K per axis; anything larger is a host bug.
const MAX_SURFACE_DIM: u32 = 8192;

#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("raster surface unavailable for {width}x{height} viewport")]
    SurfaceUnavailable { width: u32, height: u32 },
}

pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

#[inline]
fn pack(color: Rgb) -> u32 {
    let r = (color.r.clamp(0.0, 1.0) * 255.0) as u32;
    let g = (color.g.clamp(0.0, 1.0) * 255.0) as u32;
    let b = (color.b.clamp(0.0, 1.0) * 255.0) as u32;
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

#[inline]
fn unpack(px: u32) -> Rgb {
    Rgb::new(
        ((px >> 16) & 0xFF) as f32 / 255.0,
        ((px >> 8) & 0xFF) as f32 / 255.0,
        (px & 0xFF) as f32 / 255.0,
    )
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, BackdropError> {
        if width == 0 || height == 0 || width > MAX_SURFACE_DIM || height > MAX_SURFACE_DIM {
            return Err(BackdropError::SurfaceUnavailable { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0xFF00_0000; (width * height) as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel buffer as bytes, for host blits.
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        let px = pack(color);
        self.pixels.fill(px);
    }

    /// Source-over blend of `color` at `alpha` onto a single pixel.
    /// Out-of-bounds writes are silently dropped.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        let dst = unpack(self.pixels[idx]);
        self.pixels[idx] = pack(dst.lerp(color, a));
    }

    /// Additive ("lighter") blend, used by the fog layer.
    #[inline]
    pub fn add_pixel(&mut self, x: i32, y: i32, color: Rgb, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        let dst = unpack(self.pixels[idx]);
        let sum = Rgb::new(
            dst.r + color.r * a,
            dst.g + color.g * a,
            dst.b + color.b * a,
        );
        self.pixels[idx] = pack(sum);
    }

    /// Blend a uniform translucent black over the whole surface.
    pub fn dim(&mut self, alpha: f32) {
        let a = alpha.clamp(0.0, 1.0);
        for px in &mut self.pixels {
            let dst = unpack(*px);
            *px = pack(dst.scaled(1.0 - a));
        }
    }
}
