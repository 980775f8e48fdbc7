use std::f64::consts::{PI, TAU};

use glam::{DVec2, DVec3};

use super::pose::CameraPose;
use crate::options::OrbitControlsOptions;

/// Keeps the polar angle off the poles so `look_at` never sees a forward
/// vector parallel to +Y.
const POLAR_EPS: f64 = 1e-6;

/// Smallest position change reported as movement by [`OrbitControls::update`].
const MOVE_EPS: f64 = 1e-6;

/// Pointer-driven orbit camera around a target point.
///
/// Input methods only accumulate pending motion. [`update`](Self::update)
/// applies that motion to a [`CameraPose`] in spherical coordinates around
/// the target; with damping enabled each update consumes a fixed fraction
/// of what is pending, so the camera glides to rest over several frames.
///
/// Input is ignored while the controls are disabled, and disabling them
/// discards whatever motion is still pending.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    enabled: bool,
    target: DVec3,
    options: OrbitControlsOptions,
    /// Pending (azimuth, polar) change in radians.
    rotate_delta: DVec2,
    /// Pending target translation.
    pan_offset: DVec3,
    /// Pending distance multiplier.
    scale: f64,
}

impl OrbitControls {
    /// Disabled controls aimed at the origin.
    #[must_use]
    pub fn new(options: OrbitControlsOptions) -> Self {
        Self {
            enabled: false,
            target: DVec3::ZERO,
            options,
            rotate_delta: DVec2::ZERO,
            pan_offset: DVec3::ZERO,
            scale: 1.0,
        }
    }

    /// Whether pointer input is accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable pointer input. Disabling drops pending motion.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear_pending();
        }
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.target
    }

    /// Move the orbit centre.
    pub fn set_target(&mut self, target: DVec3) {
        self.target = target;
    }

    /// Tuning in effect.
    #[must_use]
    pub fn options(&self) -> &OrbitControlsOptions {
        &self.options
    }

    /// Whether any motion is still waiting to be applied.
    #[must_use]
    pub fn has_pending_motion(&self) -> bool {
        self.rotate_delta.length_squared() > MOVE_EPS * MOVE_EPS
            || self.pan_offset.length_squared() > MOVE_EPS * MOVE_EPS
            || (self.scale - 1.0).abs() > MOVE_EPS
    }

    /// Queue a rotation for a pointer drag of `delta` pixels. A drag across
    /// the full viewport height turns the camera once around the target.
    pub fn rotate(&mut self, delta: DVec2, viewport_height: f64) {
        if !self.enabled || viewport_height <= 0.0 {
            return;
        }
        let turns = delta * self.options.rotate_speed / viewport_height;
        self.rotate_delta -= turns * TAU;
    }

    /// Queue a screen-space pan for a pointer drag of `delta` pixels, so the
    /// target follows the cursor at the target's depth.
    pub fn pan(
        &mut self,
        delta: DVec2,
        viewport_height: f64,
        pose: &CameraPose,
        fovy_degrees: f64,
    ) {
        if !self.enabled || viewport_height <= 0.0 {
            return;
        }
        let delta = delta * self.options.pan_speed;
        let half_height =
            (pose.position - self.target).length() * (fovy_degrees.to_radians() / 2.0).tan();
        let world_per_pixel = 2.0 * half_height / viewport_height;

        self.pan_offset += pose.right() * (-delta.x * world_per_pixel);
        self.pan_offset += pose.up() * (delta.y * world_per_pixel);
    }

    /// Queue a dolly of `notches` wheel steps. Positive values move toward
    /// the target.
    pub fn dolly(&mut self, notches: f64) {
        if !self.enabled {
            return;
        }
        self.scale *= 0.95_f64.powf(self.options.zoom_speed * notches);
    }

    /// Apply pending motion to `pose` and re-orient it at the target.
    ///
    /// Returns whether the camera moved.
    pub fn update(&mut self, pose: &mut CameraPose) -> bool {
        let previous = *pose;
        let offset = pose.position - self.target;

        let radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };

        let step = if self.options.enable_damping {
            self.options.damping_factor.clamp(0.0, 1.0)
        } else {
            1.0
        };

        theta += self.rotate_delta.x * step;
        phi += self.rotate_delta.y * step;
        phi = phi.clamp(POLAR_EPS, PI - POLAR_EPS);

        let radius = (radius * self.scale)
            .min(self.options.max_distance)
            .max(self.options.min_distance);
        self.target += self.pan_offset * step;

        let sin_phi = phi.sin();
        let offset = DVec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        pose.position = self.target + offset;
        pose.look_at(self.target, DVec3::Y);

        let remaining = 1.0 - step;
        self.rotate_delta *= remaining;
        self.pan_offset *= remaining;
        self.scale = 1.0;

        pose.position.distance_squared(previous.position) > MOVE_EPS * MOVE_EPS
            || pose.orientation.dot(previous.orientation).abs() < 1.0 - MOVE_EPS
    }

    fn clear_pending(&mut self) {
        self.rotate_delta = DVec2::ZERO;
        self.pan_offset = DVec3::ZERO;
        self.scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const HEIGHT: f64 = 800.0;

    fn debug_framing() -> (OrbitControls, CameraPose) {
        let mut controls = OrbitControls::new(OrbitControlsOptions::default());
        controls.set_enabled(true);
        let pose = CameraPose::facing_forward(DVec3::new(0.0, 0.0, 40.0));
        (controls, pose)
    }

    #[test]
    fn update_without_input_keeps_framing() {
        let (mut controls, mut pose) = debug_framing();
        let _ = controls.update(&mut pose);
        assert_abs_diff_eq!(pose.position, DVec3::new(0.0, 0.0, 40.0), epsilon = 1e-9);
        assert_abs_diff_eq!(pose.forward(), DVec3::NEG_Z, epsilon = 1e-9);
        assert!(!controls.update(&mut pose));
    }

    #[test]
    fn damped_rotation_glides_to_rest() {
        let (mut controls, mut pose) = debug_framing();
        // A quarter of the viewport height is a quarter turn.
        controls.rotate(DVec2::new(HEIGHT / 4.0, 0.0), HEIGHT);

        assert!(controls.update(&mut pose));
        let first_step = pose.position;
        assert!(first_step.x < 0.0);
        assert!(first_step.x > -40.0 * 0.1);

        for _ in 0..1000 {
            let _ = controls.update(&mut pose);
        }
        assert!(!controls.has_pending_motion());
        assert_abs_diff_eq!(pose.position, DVec3::new(-40.0, 0.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(pose.forward(), DVec3::X, epsilon = 1e-6);
    }

    #[test]
    fn without_damping_motion_applies_at_once() {
        let options = OrbitControlsOptions {
            enable_damping: false,
            ..OrbitControlsOptions::default()
        };
        let mut controls = OrbitControls::new(options);
        controls.set_enabled(true);
        let mut pose = CameraPose::facing_forward(DVec3::new(0.0, 0.0, 40.0));

        controls.rotate(DVec2::new(HEIGHT / 4.0, 0.0), HEIGHT);
        assert!(controls.update(&mut pose));
        assert_abs_diff_eq!(pose.position, DVec3::new(-40.0, 0.0, 0.0), epsilon = 1e-9);
        assert!(!controls.has_pending_motion());
    }

    #[test]
    fn polar_angle_stays_off_the_pole() {
        let (mut controls, mut pose) = debug_framing();
        controls.rotate(DVec2::new(0.0, 10.0 * HEIGHT), HEIGHT);
        for _ in 0..500 {
            let _ = controls.update(&mut pose);
        }
        assert!(pose.position.y > 39.9);
        assert!(pose.position.is_finite());
        assert!(pose.orientation.is_finite());
    }

    #[test]
    fn distance_is_clamped() {
        let (mut controls, mut pose) = debug_framing();
        controls.dolly(-200.0);
        let _ = controls.update(&mut pose);
        assert_abs_diff_eq!(pose.position.length(), 900.0, epsilon = 1e-9);
    }

    #[test]
    fn inverted_distance_limits_settle_on_min_distance() {
        let options = OrbitControlsOptions {
            min_distance: 100.0,
            max_distance: 50.0,
            ..OrbitControlsOptions::default()
        };
        let mut controls = OrbitControls::new(options);
        controls.set_enabled(true);
        let mut pose = CameraPose::facing_forward(DVec3::new(0.0, 0.0, 40.0));
        let _ = controls.update(&mut pose);
        assert_abs_diff_eq!(pose.position.length(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn wheel_forward_moves_closer() {
        let (mut controls, mut pose) = debug_framing();
        controls.dolly(1.0);
        let _ = controls.update(&mut pose);
        assert_abs_diff_eq!(pose.position.z, 38.0, epsilon = 1e-9);
    }

    #[test]
    fn pan_moves_target_against_drag() {
        let (mut controls, mut pose) = debug_framing();
        controls.pan(DVec2::new(100.0, 0.0), HEIGHT, &pose, 75.0);
        for _ in 0..1000 {
            let _ = controls.update(&mut pose);
        }
        assert!(controls.target().x < 0.0);
        assert_abs_diff_eq!(controls.target().y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pose.position.x, controls.target().x, epsilon = 1e-6);
    }

    #[test]
    fn disabled_controls_ignore_input() {
        let mut controls = OrbitControls::new(OrbitControlsOptions::default());
        let mut pose = CameraPose::facing_forward(DVec3::new(0.0, 0.0, 40.0));
        controls.rotate(DVec2::new(200.0, 50.0), HEIGHT);
        controls.dolly(5.0);
        assert!(!controls.has_pending_motion());
        let _ = controls.update(&mut pose);
        assert_abs_diff_eq!(pose.position, DVec3::new(0.0, 0.0, 40.0), epsilon = 1e-9);
    }

    #[test]
    fn disabling_discards_pending_motion() {
        let (mut controls, mut pose) = debug_framing();
        controls.rotate(DVec2::new(200.0, 50.0), HEIGHT);
        assert!(controls.has_pending_motion());

        controls.set_enabled(false);
        controls.set_enabled(true);
        assert!(!controls.has_pending_motion());
        let _ = controls.update(&mut pose);
        assert_abs_diff_eq!(pose.position, DVec3::new(0.0, 0.0, 40.0), epsilon = 1e-9);
    }
}
