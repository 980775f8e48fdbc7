use std::f64::consts::TAU;

use glam::{DMat4, DQuat, DVec3, EulerRot, Mat4};

/// Position, Euler rotation and uniform scale of a scene object.
///
/// Rotation angles are XYZ Euler radians kept in `[0, 2π)` per component,
/// so a transform spun every frame never loses precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: DVec3,
    rotation: DVec3,
    /// Uniform scale factor.
    pub scale: f64,
    /// Whether the object is drawn.
    pub visible: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(DVec3::ZERO)
    }
}

impl Transform {
    /// Unrotated, unit-scale, visible transform at `position`.
    #[must_use]
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            rotation: DVec3::ZERO,
            scale: 1.0,
            visible: true,
        }
    }

    /// Euler rotation in radians, each component in `[0, 2π)`.
    #[must_use]
    pub fn rotation(&self) -> DVec3 {
        self.rotation
    }

    /// Replace the rotation, wrapping each component into `[0, 2π)`.
    pub fn set_rotation(&mut self, rotation: DVec3) {
        self.rotation = wrap_angles(rotation);
    }

    /// Add `delta` radians to the rotation.
    pub fn rotate(&mut self, delta: DVec3) {
        self.rotation = wrap_angles(self.rotation + delta);
    }

    /// Model matrix (scale, then XYZ rotation, then translation).
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        DMat4::from_scale_rotation_translation(
            DVec3::splat(self.scale),
            rotation,
            self.position,
        )
        .as_mat4()
    }
}

fn wrap_angles(angles: DVec3) -> DVec3 {
    let wrapped = DVec3::new(
        angles.x.rem_euclid(TAU),
        angles.y.rem_euclid(TAU),
        angles.z.rem_euclid(TAU),
    );
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    DVec3::select(wrapped.cmpge(DVec3::splat(TAU)), DVec3::ZERO, wrapped)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::Vec3;

    use super::*;

    #[test]
    fn rotation_wraps_into_full_turn() {
        let mut transform = Transform::default();
        transform.rotate(DVec3::new(TAU + 0.5, -0.25, -TAU));
        let rotation = transform.rotation();
        assert_abs_diff_eq!(rotation.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(rotation.y, TAU - 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(rotation.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn tiny_negative_angle_stays_below_full_turn() {
        let mut transform = Transform::default();
        transform.set_rotation(DVec3::new(-1e-18, 0.0, 0.0));
        assert!(transform.rotation().x < TAU);
        assert!(transform.rotation().x >= 0.0);
    }

    #[test]
    fn model_matrix_applies_scale_rotation_translation() {
        let mut transform = Transform::at(DVec3::new(1.0, 2.0, 3.0));
        transform.scale = 2.0;
        transform.set_rotation(DVec3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0));
        let moved = transform.model_matrix().transform_point3(Vec3::X);
        // +X turned a quarter about Y points along -Z.
        assert_abs_diff_eq!(moved, Vec3::new(1.0, 2.0, 1.0), epsilon = 1e-5);
    }
}
