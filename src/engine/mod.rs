//! Engine that ties the animator to a host, input, and texture loading.
//!
//! [`BackdropEngine`] is generic over a [`BackdropHost`]: the windowed
//! [`GpuSceneHost`] or the GPU-free [`HeadlessHost`]. Commands from the
//! [`InputProcessor`] are executed against the animator and the scene.

mod command;
mod host;
mod input;

pub use command::SceneCommand;
pub use host::{BackdropHost, GpuSceneHost};

use crate::animation::{HeadlessHost, Mode, SceneAnimator};
use crate::assets::TextureLoader;
use crate::error::PlanetscapeError;
use crate::gpu::render_context::RenderContext;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::scene::{ObjectHandle, Scene};
use crate::util::frame_timing::FrameTiming;

/// Frame pacing is left to the surface's vsync.
const TARGET_FPS: u32 = 0;

/// The backdrop engine: a [`SceneAnimator`] over a host, plus input
/// handling, texture loading, and frame timing.
///
/// # Construction
///
/// Use [`BackdropEngine::new`] for a window surface or
/// [`BackdropEngine::headless`] for a GPU-free engine (tests, tooling).
///
/// # Frame loop
///
/// Each redraw, call [`frame`](Self::frame) (or
/// [`render`](Self::render) on the GPU engine, which also reports surface
/// errors). A frame attaches any textures that finished decoding, then
/// advances the animator by exactly one tick, which renders exactly once.
/// Call [`resize`](Self::resize) when the window size changes. Input is
/// forwarded via [`handle_input`](Self::handle_input) and
/// [`handle_key_press`](Self::handle_key_press).
pub struct BackdropEngine<H: BackdropHost = GpuSceneHost> {
    animator: SceneAnimator<H>,
    input: InputProcessor,
    textures: TextureLoader<ObjectHandle>,
    options: Options,
    frame_timing: FrameTiming,
}

impl BackdropEngine<GpuSceneHost> {
    /// Engine drawing into `window`. Starts loading the planet and skybox
    /// textures in the background.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError`] if GPU initialization or shader
    /// composition fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, PlanetscapeError> {
        let context = RenderContext::new(window, size).await?;
        let host = GpuSceneHost::new(context, &options)?;
        let mut engine = Self::with_host(host, options);
        engine.request_textures();
        Ok(engine)
    }

    /// Run one frame and report a surface error the renderer could not
    /// recover from by reconfiguring.
    ///
    /// # Errors
    ///
    /// Returns the [`wgpu::SurfaceError`] from this frame, if any.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.frame();
        self.animator
            .host_mut()
            .take_surface_error()
            .map_or(Ok(()), Err)
    }
}

impl BackdropEngine<HeadlessHost> {
    /// Engine over a [`HeadlessHost`]. No textures are requested.
    #[must_use]
    pub fn headless(options: Options) -> Self {
        let host = HeadlessHost::from_options(&options);
        Self::with_host(host, options)
    }
}

impl<H: BackdropHost> BackdropEngine<H> {
    /// Wrap an existing host. The animator puts it in the initial
    /// scroll-mode state.
    #[must_use]
    pub fn with_host(host: H, options: Options) -> Self {
        Self {
            animator: SceneAnimator::new(host, &options),
            input: InputProcessor::with_key_bindings(options.keybindings.clone()),
            textures: TextureLoader::new(),
            options,
            frame_timing: FrameTiming::new(TARGET_FPS),
        }
    }

    /// Start decoding the planet and skybox images named in the options.
    pub fn request_textures(&mut self) {
        let scene = &self.options.scene;
        log::info!(
            "loading textures: planet {}, skybox {}",
            scene.planet_texture,
            scene.skybox_texture
        );
        self.textures
            .load(ObjectHandle::Planet, &scene.planet_texture);
        self.textures
            .load(ObjectHandle::Skybox, &scene.skybox_texture);
    }

    /// Texture requests that have not been attached yet.
    #[must_use]
    pub fn pending_textures(&self) -> usize {
        self.textures.pending()
    }

    /// One frame: attach finished textures, then tick (and render) once.
    pub fn frame(&mut self) {
        for (handle, image) in self.textures.poll() {
            self.animator.host_mut().apply_texture(handle, &image);
        }
        self.animator.tick();
        self.frame_timing.end_frame();
    }

    /// Whether the frame limiter allows another frame yet.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.frame_timing.should_render()
    }

    /// Track a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.animator.host_mut().resize(width, height);
    }

    /// Current camera mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.animator.mode()
    }

    /// Whether the page UI should be shown (hidden in debug mode).
    #[must_use]
    pub fn ui_chrome_visible(&self) -> bool {
        self.scene().page().ui_chrome_visible()
    }

    /// The scene being drawn.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.animator.host().scene()
    }

    /// The animator driving the scene.
    #[must_use]
    pub fn animator(&self) -> &SceneAnimator<H> {
        &self.animator
    }

    /// Options the engine was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }
}
