use glam::Mat4;

use super::pose::CameraPose;
use crate::options::CameraOptions;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and eye position.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Projection {
    /// Projection from the configured camera options.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Update the aspect ratio for a new viewport size. Zero-sized
    /// viewports (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix for `pose`.
    #[must_use]
    pub fn view_proj(&self, pose: &CameraPose) -> Mat4 {
        self.matrix() * pose.view_matrix()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the camera's current pose.
    pub fn update_view_proj(&mut self, pose: &CameraPose, projection: &Projection) {
        self.view_proj = projection.view_proj(pose).to_cols_array_2d();
        self.position = pose.position.as_vec3().to_array();
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::{DVec3, Vec4};

    use super::*;

    #[test]
    fn uniform_is_eighty_bytes() {
        assert_eq!(size_of::<CameraUniform>(), 80);
    }

    #[test]
    fn resize_ignores_zero_sized_viewport() {
        let mut projection = Projection::from_options(&CameraOptions::default(), 1.0);
        projection.resize(1600, 800);
        assert_abs_diff_eq!(projection.aspect, 2.0);
        projection.resize(0, 800);
        assert_abs_diff_eq!(projection.aspect, 2.0);
    }

    #[test]
    fn planet_centre_projects_to_screen_centre() {
        let projection = Projection::from_options(&CameraOptions::default(), 1.5);
        let pose = CameraPose::facing_forward(DVec3::new(0.0, 0.0, 16.5));
        let clip = projection.view_proj(&pose) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.w > 0.0);
        assert_abs_diff_eq!(clip.x / clip.w, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(clip.y / clip.w, 0.0, epsilon = 1e-6);
        let depth = clip.z / clip.w;
        assert!((0.0..=1.0).contains(&depth));
    }
}
