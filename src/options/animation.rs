use std::f64::consts::FRAC_PI_4;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-frame increments of the ambient motion. All angles are radians per
/// frame; nothing is normalized by wall-clock time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Planet spin about its Y axis.
    #[schemars(title = "Planet Spin", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub planet_spin: f64,
    /// Skybox drift applied to each of its three axes once loaded.
    #[schemars(title = "Skybox Drift", range(min = 0.0, max = 0.001), extend("step" = 0.00001))]
    pub skybox_drift: f64,
    /// Ship orbit angle step.
    #[schemars(title = "Orbit Speed", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub orbit_speed: f64,
    /// Ship orbit radius.
    #[schemars(title = "Orbit Radius", range(min = 16.0, max = 150.0), extend("step" = 1.0))]
    pub orbit_radius: f64,
    /// Tilt of the orbital plane about the X axis.
    #[schemars(title = "Orbit Inclination", range(min = 0.0, max = 3.15), extend("step" = 0.01))]
    pub orbit_inclination: f64,
    /// Ship spin about its own Z axis.
    #[schemars(title = "Ship Spin", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub ship_spin: f64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            planet_spin: 0.01,
            skybox_drift: 0.00007,
            orbit_speed: 0.02,
            orbit_radius: 25.0,
            orbit_inclination: FRAC_PI_4,
            ship_spin: 0.02,
        }
    }
}
