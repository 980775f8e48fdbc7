use glam::{DMat3, DMat4, DQuat, DVec3, Mat4};

/// Camera position and orientation in world space.
///
/// The camera looks down its local −Z axis with local +Y as up, the same
/// convention `Mat4::look_to_rh` uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position.
    pub position: DVec3,
    /// Rotation from camera space to world space.
    pub orientation: DQuat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::facing_forward(DVec3::ZERO)
    }
}

impl CameraPose {
    /// Pose at `position` looking along world −Z with +Y up.
    #[must_use]
    pub fn facing_forward(position: DVec3) -> Self {
        let mut pose = Self {
            position,
            orientation: DQuat::IDENTITY,
        };
        pose.face_forward();
        pose
    }

    /// Re-orient to look at `position + (0, 0, -1)` with +Y up, whatever
    /// the camera was looking at before.
    pub fn face_forward(&mut self) {
        self.look_at(self.position + DVec3::NEG_Z, DVec3::Y);
    }

    /// Re-orient so the camera looks at `target` with `up` as the
    /// preferred up direction. A target at the eye leaves the orientation
    /// untouched.
    pub fn look_at(&mut self, target: DVec3, up: DVec3) {
        let forward = (target - self.position).normalize_or_zero();
        if forward == DVec3::ZERO {
            return;
        }

        let mut right = forward.cross(up);
        if right.length_squared() < 1e-12 {
            // Looking straight along `up`: pick any other axis.
            let alternate = if forward.z.abs() < 0.9 {
                DVec3::Z
            } else {
                DVec3::X
            };
            right = forward.cross(alternate);
        }
        let right = right.normalize();
        let true_up = right.cross(forward);

        self.orientation =
            DQuat::from_mat3(&DMat3::from_cols(right, true_up, -forward));
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        self.orientation * DVec3::NEG_Z
    }

    /// Unit camera up vector.
    #[must_use]
    pub fn up(&self) -> DVec3 {
        self.orientation * DVec3::Y
    }

    /// Unit camera right vector.
    #[must_use]
    pub fn right(&self) -> DVec3 {
        self.orientation * DVec3::X
    }

    /// World-to-view matrix for the GPU.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        DMat4::look_to_rh(self.position, self.forward(), self.up()).as_mat4()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn forward_rule_is_identity_orientation() {
        let pose = CameraPose::facing_forward(DVec3::new(3.0, -2.0, 16.5));
        assert_eq!(pose.orientation, DQuat::IDENTITY);
        assert_eq!(pose.forward(), DVec3::NEG_Z);
        assert_eq!(pose.up(), DVec3::Y);
    }

    #[test]
    fn face_forward_discards_previous_look_at() {
        let mut pose = CameraPose::facing_forward(DVec3::new(0.0, 0.0, 40.0));
        pose.look_at(DVec3::new(10.0, 5.0, 0.0), DVec3::Y);
        assert_ne!(pose.orientation, DQuat::IDENTITY);

        pose.face_forward();
        assert_eq!(pose.orientation, DQuat::IDENTITY);
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut pose = CameraPose::facing_forward(DVec3::new(10.0, 4.0, -3.0));
        pose.look_at(DVec3::ZERO, DVec3::Y);
        let expected = (DVec3::ZERO - pose.position).normalize();
        assert_abs_diff_eq!(pose.forward(), expected, epsilon = 1e-9);
        assert_abs_diff_eq!(pose.right().y, 0.0, epsilon = 1e-9);
        assert!(pose.up().y > 0.0);
    }

    #[test]
    fn look_at_straight_down_does_not_degenerate() {
        let mut pose = CameraPose::facing_forward(DVec3::new(0.0, 50.0, 0.0));
        pose.look_at(DVec3::ZERO, DVec3::Y);
        assert!(pose.orientation.is_finite());
        assert_abs_diff_eq!(pose.forward(), DVec3::NEG_Y, epsilon = 1e-9);
    }

    #[test]
    fn look_at_own_position_keeps_orientation() {
        let mut pose = CameraPose::facing_forward(DVec3::new(1.0, 2.0, 3.0));
        pose.look_at(pose.position, DVec3::Y);
        assert_eq!(pose.orientation, DQuat::IDENTITY);
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let pose = CameraPose::facing_forward(DVec3::new(0.0, 0.0, 16.5));
        let eye = pose.view_matrix().transform_point3(glam::Vec3::new(0.0, 0.0, 16.5));
        assert_abs_diff_eq!(eye.length(), 0.0, epsilon = 1e-5);
    }
}
