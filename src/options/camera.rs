use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and the two fixed framing positions.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Where the camera sits at the top of the page in scroll mode.
    pub start_position: [f64; 3],
    /// Wide framing the camera jumps to when debug mode is entered.
    pub debug_position: [f64; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            start_position: [0.0, 0.0, 16.5],
            debug_position: [0.0, 0.0, 40.0],
        }
    }
}
