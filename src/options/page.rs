use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Virtual page scrolled by the mouse wheel in the standalone viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Page", inline)]
#[serde(default)]
pub struct PageOptions {
    /// Scrollable height of the page in pixels.
    #[schemars(title = "Page Length", range(min = 0.0, max = 20000.0), extend("step" = 100.0))]
    pub length: f64,
    /// Pixels scrolled per wheel notch.
    #[schemars(title = "Wheel Step", range(min = 1.0, max = 400.0), extend("step" = 1.0))]
    pub wheel_step: f64,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            length: 4000.0,
            wheel_step: 100.0,
        }
    }
}
