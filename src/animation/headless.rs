use glam::DVec3;

use super::host::SceneHost;
use crate::camera::CameraPose;
use crate::options::Options;
use crate::scene::{ObjectHandle, Scene, Transform};

/// Viewport the headless host pretends to render into.
const HEADLESS_VIEWPORT: (u32, u32) = (1280, 720);

/// A [`SceneHost`] with a real [`Scene`] and no GPU. Rendering only counts
/// frames.
pub struct HeadlessHost {
    /// Scene state.
    pub scene: Scene,
    /// Number of [`render`](SceneHost::render) calls so far.
    pub frames_rendered: u64,
}

impl HeadlessHost {
    /// Wrap an existing scene.
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            frames_rendered: 0,
        }
    }

    /// Build a scene from `options` at a fixed 1280x720 viewport.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let (width, height) = HEADLESS_VIEWPORT;
        Self::new(Scene::new(options, width, height))
    }
}

impl SceneHost for HeadlessHost {
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
        self.frames_rendered += 1;
    }
}
