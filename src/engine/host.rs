//! Hosts the engine can drive: the wgpu-backed one and the headless one.

use glam::DVec3;

use crate::animation::{HeadlessHost, SceneHost};
use crate::assets::LoadedImage;
use crate::camera::CameraPose;
use crate::error::PlanetscapeError;
use crate::gpu::render_context::RenderContext;
use crate::options::Options;
use crate::renderer::SceneRenderer;
use crate::scene::{ObjectHandle, Scene, Transform};

/// A [`SceneHost`] that exposes its [`Scene`] and accepts decoded textures.
///
/// The animator only needs [`SceneHost`]; the engine additionally scrolls
/// the page, feeds the orbit controls, and attaches textures as they
/// arrive.
pub trait BackdropHost: SceneHost {
    /// The scene being drawn.
    fn scene(&self) -> &Scene;

    /// Mutable access to the scene.
    fn scene_mut(&mut self) -> &mut Scene;

    /// Track a new viewport size.
    fn resize(&mut self, width: u32, height: u32);

    /// A texture for `handle` finished decoding. The skybox joins the scene
    /// at this point.
    fn apply_texture(&mut self, handle: ObjectHandle, image: &LoadedImage);
}

impl BackdropHost for HeadlessHost {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
    }

    fn apply_texture(&mut self, handle: ObjectHandle, _image: &LoadedImage) {
        if handle == ObjectHandle::Skybox {
            let _ = self.scene.attach_skybox();
        }
    }
}

/// The windowed host: a [`Scene`] drawn by a [`SceneRenderer`] into a
/// wgpu surface.
pub struct GpuSceneHost {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    scene: Scene,
    renderer: SceneRenderer,
    surface_error: Option<wgpu::SurfaceError>,
}

impl GpuSceneHost {
    /// Build the scene at the surface size and upload it.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::Shader`] if a shader fails to compose.
    pub fn new(context: RenderContext, options: &Options) -> Result<Self, PlanetscapeError> {
        let (width, height) = context.size();
        let scene = Scene::new(options, width, height);
        let renderer = SceneRenderer::new(&context, &scene)?;
        Ok(Self {
            context,
            scene,
            renderer,
            surface_error: None,
        })
    }

    /// The last unrecoverable surface error, cleared on read.
    pub fn take_surface_error(&mut self) -> Option<wgpu::SurfaceError> {
        self.surface_error.take()
    }
}

impl BackdropHost for GpuSceneHost {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.renderer.resize(&self.context.device, width, height);
        self.scene.resize(width, height);
    }

    fn apply_texture(&mut self, handle: ObjectHandle, image: &LoadedImage) {
        if !self.renderer.set_texture(&self.context, handle, image) {
            return;
        }
        log::debug!("{handle:?} texture bound ({}x{})", image.width, image.height);
        if handle == ObjectHandle::Skybox {
            let _ = self.scene.attach_skybox();
        }
    }
}

impl SceneHost for GpuSceneHost {
    fn camera_pose(&self) -> CameraPose {
        self.scene.camera()
    }

    fn set_camera_pose(&mut self, pose: CameraPose) {
        self.scene.set_camera(pose);
    }

    fn transform_mut(&mut self, handle: ObjectHandle) -> Option<&mut Transform> {
        self.scene.transform_mut(handle)
    }

    fn set_helpers_visible(&mut self, visible: bool) {
        self.scene.set_helpers_visible(visible);
    }

    fn set_ui_chrome_visible(&mut self, visible: bool) {
        self.scene.page_mut().set_ui_chrome_visible(visible);
    }

    fn scroll_offset(&self) -> f64 {
        self.scene.page().scroll_offset()
    }

    fn scroll_to_top(&mut self) {
        self.scene.page_mut().scroll_to_top();
    }

    fn set_orbit_enabled(&mut self, enabled: bool) {
        self.scene.set_orbit_enabled(enabled);
    }

    fn set_orbit_target(&mut self, target: DVec3) {
        self.scene.set_orbit_target(target);
    }

    fn update_orbit(&mut self) {
        let _ = self.scene.update_orbit();
    }

    fn render(&mut self) {
        match self.renderer.render(&self.context, &self.scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                self.context.reconfigure();
            }
            Err(e) => {
                log::error!("render error: {e}");
                self.surface_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_skybox_joins_on_texture() {
        let mut host = HeadlessHost::from_options(&Options::default());
        let image = LoadedImage {
            width: 1,
            height: 1,
            rgba: vec![0; 4],
        };
        host.apply_texture(ObjectHandle::Planet, &image);
        assert!(!host.scene().has_skybox());

        host.apply_texture(ObjectHandle::Skybox, &image);
        assert!(host.scene().has_skybox());
    }

    #[test]
    fn headless_resize_updates_aspect() {
        let mut host = HeadlessHost::from_options(&Options::default());
        host.resize(800, 800);
        assert_eq!(host.scene().viewport(), (800, 800));
        assert!((host.scene().projection().aspect - 1.0).abs() < 1e-6);
    }
}
