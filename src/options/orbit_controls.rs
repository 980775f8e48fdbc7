use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlanetscapeError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Controls", inline)]
#[serde(default)]
/// Debug-mode orbit controller tuning.
pub struct OrbitControlsOptions {
    /// Spread pointer motion over several frames instead of applying it at
    /// once.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Fraction of the pending motion applied (and removed) per update.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f64,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub rotate_speed: f64,
    /// Wheel zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub zoom_speed: f64,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub pan_speed: f64,
    /// Closest allowed distance to the target.
    #[schemars(skip)]
    pub min_distance: f64,
    /// Farthest allowed distance to the target.
    #[schemars(skip)]
    pub max_distance: f64,
}

impl Default for OrbitControlsOptions {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: 900.0,
        }
    }
}

impl OrbitControlsOptions {
    /// Reject tunings that leave the controller without a valid distance
    /// range or step.
    ///
    /// `max_distance` may be infinite; every other value must be finite.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::OptionsParse`] naming the bad field.
    pub fn validate(&self) -> Result<(), PlanetscapeError> {
        let finite = [
            ("damping_factor", self.damping_factor),
            ("rotate_speed", self.rotate_speed),
            ("zoom_speed", self.zoom_speed),
            ("pan_speed", self.pan_speed),
            ("min_distance", self.min_distance),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(PlanetscapeError::OptionsParse(format!(
                    "orbit_controls.{name} must be finite, got {value}"
                )));
            }
        }
        if self.max_distance.is_nan() || self.min_distance < 0.0 {
            return Err(PlanetscapeError::OptionsParse(format!(
                "orbit_controls distance range {}..{} is not valid",
                self.min_distance, self.max_distance
            )));
        }
        if self.min_distance > self.max_distance {
            return Err(PlanetscapeError::OptionsParse(format!(
                "orbit_controls.min_distance {} exceeds max_distance {}",
                self.min_distance, self.max_distance
            )));
        }
        Ok(())
    }
}
