use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlanetscapeError;

/// Scene content: sizes, textures, and the starfield.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
pub struct SceneOptions {
    /// Planet sphere radius.
    #[schemars(skip)]
    pub planet_radius: f32,
    /// Image mapped onto the planet.
    #[schemars(skip)]
    pub planet_texture: String,
    /// Skybox sphere radius (must stay inside the far plane).
    #[schemars(skip)]
    pub skybox_radius: f32,
    /// Image mapped onto the inside of the skybox.
    #[schemars(skip)]
    pub skybox_texture: String,
    /// Number of stars scattered around the scene.
    #[schemars(title = "Stars", range(min = 0, max = 5000))]
    pub star_count: u32,
    /// Radius of a single star.
    #[schemars(title = "Star Size", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub star_radius: f32,
    /// Edge length of the cube the stars are scattered in.
    #[schemars(skip)]
    pub star_spread: f64,
    /// Fixed seed for a reproducible starfield.
    #[schemars(skip)]
    pub star_seed: Option<u64>,
    /// Circumradius of the ship octahedron.
    #[schemars(skip)]
    pub ship_radius: f32,
    /// Ship color (linear RGB).
    #[schemars(skip)]
    pub ship_color: [f32; 3],
    /// Where the ship sits before the first frame.
    #[schemars(skip)]
    pub ship_initial_position: [f64; 3],
    /// Edge length of the debug grid.
    #[schemars(skip)]
    pub grid_size: f32,
    /// Number of cells along each edge of the debug grid.
    #[schemars(skip)]
    pub grid_divisions: u32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            planet_radius: 15.0,
            planet_texture: "images/2k_neptune.jpg".into(),
            skybox_radius: 300.0,
            skybox_texture: "images/space_4.jpg".into(),
            star_count: 700,
            star_radius: 0.25,
            star_spread: 400.0,
            star_seed: None,
            ship_radius: 2.0,
            // orangered
            ship_color: [1.0, 0.059, 0.0],
            ship_initial_position: [-50.0, 0.0, -20.0],
            grid_size: 300.0,
            grid_divisions: 50,
        }
    }
}

impl SceneOptions {
    /// Reject sizes the scene cannot be built from.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::OptionsParse`] for a negative or
    /// non-finite star spread or object radius.
    pub fn validate(&self) -> Result<(), PlanetscapeError> {
        if !self.star_spread.is_finite() || self.star_spread < 0.0 {
            return Err(PlanetscapeError::OptionsParse(format!(
                "scene.star_spread must be finite and non-negative, got {}",
                self.star_spread
            )));
        }
        let radii = [
            ("planet_radius", self.planet_radius),
            ("skybox_radius", self.skybox_radius),
            ("star_radius", self.star_radius),
            ("ship_radius", self.ship_radius),
        ];
        for (name, radius) in radii {
            if !radius.is_finite() || radius < 0.0 {
                return Err(PlanetscapeError::OptionsParse(format!(
                    "scene.{name} must be finite and non-negative, got {radius}"
                )));
            }
        }
        Ok(())
    }
}
