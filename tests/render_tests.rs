// Raster surface behavior and layered paint determinism.

use glam::Vec2;
use neon_backdrop::profile::Tier;
use neon_backdrop::render::color::{default_accent, hsl_to_rgb, palette, parse_hex, Rgb};
use neon_backdrop::render::surface::PixelSurface;
use neon_backdrop::render::LayeredRenderer;
use neon_backdrop::scene::SceneState;

fn scene(tier: Tier, w: f32, h: f32, seed: u64) -> SceneState {
    SceneState::initialize(tier, w, h, palette(default_accent()), seed)
}

#[test]
fn surface_rejects_degenerate_dimensions() {
    assert!(PixelSurface::new(0, 600).is_err());
    assert!(PixelSurface::new(800, 0).is_err());
    assert!(PixelSurface::new(64, 48).is_ok());
}

#[test]
fn fill_sets_every_pixel() {
    let mut s = PixelSurface::new(8, 8).expect("surface");
    s.fill(Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(s.pixel(0, 0), Some(0xFFFF_0000));
    assert_eq!(s.pixel(7, 7), Some(0xFFFF_0000));
    assert_eq!(s.pixel(8, 8), None);
}

#[test]
fn bytes_cover_the_full_buffer() {
    let s = PixelSurface::new(16, 9).expect("surface");
    assert_eq!(s.bytes().len(), 16 * 9 * 4);
}

#[test]
fn out_of_bounds_writes_are_dropped() {
    let mut s = PixelSurface::new(4, 4).expect("surface");
    s.blend_pixel(-1, 0, Rgb::new(1.0, 1.0, 1.0), 1.0);
    s.blend_pixel(0, 99, Rgb::new(1.0, 1.0, 1.0), 1.0);
    s.add_pixel(99, 0, Rgb::new(1.0, 1.0, 1.0), 1.0);
    assert_eq!(s.pixel(0, 0), Some(0xFF00_0000));
}

#[test]
fn additive_blend_saturates() {
    let mut s = PixelSurface::new(2, 2).expect("surface");
    s.fill(Rgb::new(0.9, 0.9, 0.9));
    s.add_pixel(0, 0, Rgb::new(1.0, 1.0, 1.0), 1.0);
    assert_eq!(s.pixel(0, 0), Some(0xFFFF_FFFF));
}

#[test]
fn parse_hex_handles_long_short_and_garbage() {
    assert_eq!(parse_hex("#FF0050"), Some(Rgb::new(1.0, 0.0, 80.0 / 255.0)));
    assert_eq!(parse_hex("fff"), Some(Rgb::new(1.0, 1.0, 1.0)));
    assert_eq!(parse_hex("#12345"), None);
    assert_eq!(parse_hex("not-a-color"), None);
}

#[test]
fn hsl_hits_the_primaries() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red.r - 1.0).abs() < 1e-4 && red.g < 1e-4 && red.b < 1e-4);
    let green = hsl_to_rgb(120.0, 1.0, 0.5);
    assert!(green.g > 0.99 && green.r < 1e-4);
    // hue wraps in both directions
    let wrapped = hsl_to_rgb(360.0 + 120.0, 1.0, 0.5);
    assert_eq!(green, wrapped);
}

#[test]
fn render_is_deterministic_for_identical_scenes() {
    let renderer = LayeredRenderer::new(false);
    let mut surf_a = PixelSurface::new(96, 64).expect("surface");
    let mut surf_b = PixelSurface::new(96, 64).expect("surface");
    let mut scene_a = scene(Tier::Desktop, 96.0, 64.0, 99);
    let mut scene_b = scene(Tier::Desktop, 96.0, 64.0, 99);
    for frame in 0..5 {
        renderer.render_frame(&mut surf_a, &mut scene_a, Vec2::new(3.0, -2.0), 0.5, frame);
        renderer.render_frame(&mut surf_b, &mut scene_b, Vec2::new(3.0, -2.0), 0.5, frame);
    }
    assert_eq!(surf_a.bytes(), surf_b.bytes());
}

#[test]
fn render_paints_something_over_the_background() {
    let renderer = LayeredRenderer::new(false);
    let mut surf = PixelSurface::new(96, 64).expect("surface");
    let mut sc = scene(Tier::Desktop, 96.0, 64.0, 5);
    renderer.render_frame(&mut surf, &mut sc, Vec2::ZERO, 0.0, 0);
    let lit = (0..64)
        .flat_map(|y| (0..96).map(move |x| (x, y)))
        .filter(|&(x, y)| surf.pixel(x, y) != Some(0xFF00_0000))
        .count();
    assert!(lit > 0, "frame left the surface untouched");
}

#[test]
fn all_tiers_render_without_panic() {
    for tier in [Tier::Low, Tier::Mobile, Tier::Desktop] {
        let renderer = LayeredRenderer::new(false);
        let mut surf = PixelSurface::new(64, 48).expect("surface");
        let mut sc = scene(tier, 64.0, 48.0, 2);
        for frame in 0..10 {
            renderer.render_frame(&mut surf, &mut sc, Vec2::ZERO, 1.0, frame);
        }
    }
}

#[test]
fn reduced_motion_skips_spark_advancement() {
    let renderer = LayeredRenderer::new(true);
    let mut surf = PixelSurface::new(64, 48).expect("surface");
    let mut sc = scene(Tier::Desktop, 64.0, 48.0, 8);
    let before: Vec<(f32, f32)> = sc.sparks.iter().map(|s| (s.x, s.y)).collect();
    renderer.render_frame(&mut surf, &mut sc, Vec2::ZERO, 0.0, 0);
    let after: Vec<(f32, f32)> = sc.sparks.iter().map(|s| (s.x, s.y)).collect();
    assert_eq!(before, after);
}
