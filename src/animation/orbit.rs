use glam::DVec3;

use crate::options::AnimationOptions;

/// The ship's circular orbit around the origin.
///
/// The orbit lies on the XY circle of `radius`, tilted about the X axis by
/// `inclination`. `angle` grows by `speed` on every [`advance`](Self::advance)
/// and is never wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Current orbital angle in radians.
    pub angle: f64,
    /// Distance from the origin.
    pub radius: f64,
    /// Tilt of the orbital plane about the X axis, in radians.
    pub inclination: f64,
    /// Angle added per tick.
    pub speed: f64,
}

impl OrbitState {
    /// Orbit at angle zero with the configured shape and speed.
    #[must_use]
    pub fn from_options(options: &AnimationOptions) -> Self {
        Self {
            angle: 0.0,
            radius: options.orbit_radius,
            inclination: options.orbit_inclination,
            speed: options.orbit_speed,
        }
    }

    /// Step the angle forward and return the new position.
    pub fn advance(&mut self) -> DVec3 {
        self.angle += self.speed;
        self.position()
    }

    /// Position on the tilted circle at the current angle.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        let (sin_a, cos_a) = self.angle.sin_cos();
        let x = sin_a * self.radius;
        let y = cos_a * self.radius;
        let z = 0.0;

        let (sin_i, cos_i) = self.inclination.sin_cos();
        DVec3::new(x, y * cos_i - z * sin_i, y * sin_i + z * cos_i)
    }

    /// Unit normal of the orbital plane.
    #[must_use]
    pub fn plane_normal(&self) -> DVec3 {
        let (sin_i, cos_i) = self.inclination.sin_cos();
        DVec3::new(0.0, -sin_i, cos_i)
    }
}
