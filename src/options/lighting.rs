use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Point light plus flat ambient term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// World-space position of the point light.
    #[schemars(skip)]
    pub point_position: [f32; 3],
    /// Point light intensity (inverse-square falloff).
    #[schemars(title = "Point Light", range(min = 0.0, max = 5000.0), extend("step" = 10.0))]
    pub point_intensity: f32,
    /// Point light color (linear RGB).
    #[schemars(skip)]
    pub point_color: [f32; 3],
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient_intensity: f32,
    /// Ambient light color (linear RGB).
    #[schemars(skip)]
    pub ambient_color: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            point_position: [7.0, 15.0, 20.0],
            point_intensity: 1000.0,
            point_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.15,
            ambient_color: [1.0, 1.0, 1.0],
        }
    }
}
