use glam::DVec3;

use crate::camera::CameraPose;
use crate::scene::{ObjectHandle, Transform};

/// Rendering runtime the [`SceneAnimator`](super::SceneAnimator) drives.
///
/// A host owns the scene graph, the camera, the orbit controls, the page
/// and the draw call. The animator only reads and writes through this
/// trait, so the same state machine runs against the GPU host or a
/// headless one.
pub trait SceneHost {
    /// Current camera pose.
    fn camera_pose(&self) -> CameraPose;

    /// Replace the camera pose.
    fn set_camera_pose(&mut self, pose: CameraPose);

    /// Transform of an object, or `None` if it has not been added yet.
    fn transform_mut(&mut self, handle: ObjectHandle) -> Option<&mut Transform>;

    /// Show or hide the light and grid helpers.
    fn set_helpers_visible(&mut self, visible: bool);

    /// Show or hide the page UI.
    fn set_ui_chrome_visible(&mut self, visible: bool);

    /// The page top's position relative to the viewport (zero at the top,
    /// negative once scrolled down).
    fn scroll_offset(&self) -> f64;

    /// Scroll the page back to the top.
    fn scroll_to_top(&mut self);

    /// Enable or disable pointer input on the orbit controls. Disabling
    /// discards pending motion.
    fn set_orbit_enabled(&mut self, enabled: bool);

    /// Point the orbit controls at `target`.
    fn set_orbit_target(&mut self, target: DVec3);

    /// Apply pending orbit motion to the camera.
    fn update_orbit(&mut self);

    /// Draw one frame.
    fn render(&mut self);
}
