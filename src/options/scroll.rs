use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-axis camera drift per unit of scroll offset.
///
/// The scroll offset is the page top's position relative to the viewport,
/// so it is zero at the top and grows negative as the page scrolls down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scroll", inline)]
#[serde(default)]
pub struct ScrollOptions {
    /// Sideways drift.
    #[schemars(title = "X Sensitivity")]
    pub sensitivity_x: f64,
    /// Vertical drift.
    #[schemars(title = "Y Sensitivity")]
    pub sensitivity_y: f64,
    /// Depth drift (zoom).
    #[schemars(title = "Z Sensitivity")]
    pub sensitivity_z: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            sensitivity_x: 0.075,
            sensitivity_y: 0.002,
            sensitivity_z: -0.1,
        }
    }
}

impl ScrollOptions {
    /// Sensitivities as an `[x, y, z]` triple.
    #[must_use]
    pub fn sensitivity(&self) -> [f64; 3] {
        [self.sensitivity_x, self.sensitivity_y, self.sensitivity_z]
    }
}
