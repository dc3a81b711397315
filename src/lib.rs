//! Adaptive procedural backdrop engine.
//!
//! A real-time decorative scene of outlined neon glyphs, rising dust,
//! falling orbs and short-lived sparks, painted onto a CPU raster surface
//! at a capability-tiered frame rate, with pointer/scroll-driven
//! parallax. The crate is host-agnostic: a web shell, a windowing shell,
//! or a test harness supplies viewport dimensions, input deliveries and
//! frame-callback timestamps, and blits [`Backdrop::frame_bytes`]
//! wherever it likes. No platform API is touched here.
//!
//! Lifecycle is explicit: [`Backdrop::new`] builds the whole scene,
//! [`Backdrop::pump`] runs one throttled update+render cycle per host
//! frame callback, and [`Backdrop::dispose`] makes every later call
//! inert so stale callbacks can never touch freed state.

use glam::Vec2;

pub mod camera;
pub mod constants;
pub mod frame;
pub mod input;
pub mod profile;
pub mod render;
pub mod scene;

pub use frame::{FrameClock, FrameScheduler, InstantClock};
pub use input::{ChannelSet, InputSampler};
pub use profile::{classify, EnvProbe, ResizeDebouncer, Tier};
pub use render::surface::BackdropError;

use camera::SmoothedOffset;
use render::color::{self, Rgb};
use render::surface::PixelSurface;
use render::LayeredRenderer;
use scene::SceneState;

/// Host-tunable parameters.
#[derive(Clone, Debug, Default)]
pub struct BackdropParams {
    /// Accent color as a `#RRGGBB` hex string; feeds the shape palette.
    pub accent: Option<String>,
    /// Honors the platform's reduced-motion preference: disables sparks,
    /// glow pulsing and dust twinkle.
    pub reduced_motion: bool,
    /// Overrides the tier's target frame rate when set.
    pub fps_override: Option<f64>,
}

/// Capability hints beyond the viewport itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeviceHints {
    /// Logical processor count; 0 means unknown.
    pub logical_cores: u32,
    /// Coarse "constrained device" signal from the host's own sniffing.
    pub constrained_device: bool,
}

/// The embeddable visual surface: owns scene, input, camera, pacing and
/// the pixel buffer.
pub struct Backdrop {
    params: BackdropParams,
    hints: DeviceHints,
    tier: Tier,
    accent: Rgb,
    scene: SceneState,
    sampler: InputSampler,
    camera: SmoothedOffset,
    scheduler: FrameScheduler,
    renderer: LayeredRenderer,
    surface: Option<PixelSurface>,
    resize_debounce: ResizeDebouncer,
    seed: u64,
    frame_index: u64,
    disposed: bool,
}

impl Backdrop {
    /// Build the full scene for the given viewport. A degenerate viewport
    /// degrades to a surfaceless engine that skips painting; it never
    /// fails the host.
    pub fn new(
        width: u32,
        height: u32,
        hints: DeviceHints,
        params: BackdropParams,
        seed: u64,
    ) -> Self {
        let probe = EnvProbe {
            viewport_width: width as f32,
            logical_cores: hints.logical_cores,
            constrained_device: hints.constrained_device,
        };
        let tier = classify(&probe);
        let accent = resolve_accent(params.accent.as_deref());
        let palette = color::palette(accent);
        let scene = SceneState::initialize(tier, width as f32, height as f32, palette, seed);
        let surface = acquire_surface(width, height);
        let fps = params.fps_override.unwrap_or_else(|| tier.target_fps());
        log::info!(
            "[backdrop] tier={:?} viewport={}x{} shapes={} dust={} orbs={} sparks={}",
            tier,
            width,
            height,
            scene.shapes.len(),
            scene.dust.len(),
            scene.orbs.len(),
            scene.sparks.len()
        );
        Self {
            renderer: LayeredRenderer::new(params.reduced_motion),
            sampler: InputSampler::new(width as f32, height as f32),
            camera: SmoothedOffset::new(),
            scheduler: FrameScheduler::new(fps),
            resize_debounce: ResizeDebouncer::new(),
            params,
            hints,
            tier,
            accent,
            scene,
            surface,
            seed,
            frame_index: 0,
            disposed: false,
        }
    }

    /// One host frame callback. Returns true when a full update+render
    /// cycle actually ran (callbacks faster than the tier's target rate
    /// are dropped; a missing surface skips painting but keeps pacing).
    pub fn pump(&mut self, now_ms: f64) -> bool {
        if self.disposed {
            return false;
        }
        if let Some((w, h)) = self.resize_debounce.poll(now_ms) {
            self.apply_resize(w, h);
        }
        if !self.scheduler.should_render(now_ms) {
            return false;
        }
        self.sampler.commit();
        self.camera.step(self.sampler.target_offset());
        if let Some(surface) = self.surface.as_mut() {
            self.renderer.render_frame(
                surface,
                &mut self.scene,
                self.camera.get(),
                self.sampler.scroll_factor(),
                self.frame_index,
            );
        }
        self.frame_index += 1;
        true
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.disposed {
            self.sampler.pointer_moved(x, y);
        }
    }

    pub fn touch_moved(&mut self, x: f32, y: f32) {
        if !self.disposed {
            self.sampler.touch_moved(x, y);
        }
    }

    pub fn scrolled(&mut self, scroll_y: f32) {
        if !self.disposed {
            self.sampler.scrolled(scroll_y);
        }
    }

    /// Note a raw resize event. The change is debounced and applied on a
    /// later [`Backdrop::pump`], so a resize storm reinitializes once.
    pub fn resized(&mut self, width: u32, height: u32, now_ms: f64) {
        if !self.disposed {
            self.resize_debounce.note(width, height, now_ms);
        }
    }

    /// Tear everything down. Idempotent; every later entry point is inert.
    pub fn dispose(&mut self) {
        self.scheduler.cancel();
        self.sampler.detach();
        self.surface = None;
        self.disposed = true;
    }

    /// The rendered frame as raw `0xAARRGGBB` bytes for the host blit, or
    /// `None` when the surface is unavailable (host keeps its static
    /// background).
    pub fn frame_bytes(&self) -> Option<&[u8]> {
        self.surface.as_ref().map(|s| s.bytes())
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn surface_size(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(|s| (s.width(), s.height()))
    }

    pub fn camera_offset(&self) -> Vec2 {
        self.camera.get()
    }

    fn apply_resize(&mut self, width: u32, height: u32) {
        let probe = EnvProbe {
            viewport_width: width as f32,
            logical_cores: self.hints.logical_cores,
            constrained_device: self.hints.constrained_device,
        };
        let tier = classify(&probe);
        if tier != self.tier {
            log::info!("[backdrop] tier change {:?} -> {:?}", self.tier, tier);
            let fps = self.params.fps_override.unwrap_or_else(|| tier.target_fps());
            self.scheduler.set_target_fps(fps);
            self.tier = tier;
        }
        let palette = color::palette(self.accent);
        self.scene = SceneState::initialize(tier, width as f32, height as f32, palette, self.seed);
        self.sampler.set_viewport(width as f32, height as f32);
        self.surface = acquire_surface(width, height);
    }
}

fn resolve_accent(accent: Option<&str>) -> Rgb {
    match accent {
        Some(hex) => color::parse_hex(hex).unwrap_or_else(|| {
            log::warn!("[backdrop] unparseable accent {hex:?}; using default");
            color::default_accent()
        }),
        None => color::default_accent(),
    }
}

fn acquire_surface(width: u32, height: u32) -> Option<PixelSurface> {
    match PixelSurface::new(width, height) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("[backdrop] {e}; rendering disabled");
            None
        }
    }
}
