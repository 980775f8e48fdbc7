//! Centralized tuning options with TOML support.
//!
//! Every constant the backdrop uses (camera framing, scroll sensitivity,
//! per-frame animation steps, orbit-control feel, scene content, lighting,
//! key bindings and the virtual page) lives here. Options serialize to/from
//! TOML so a deployment can override any subset of them.

mod animation;
mod camera;
mod keybindings;
mod lighting;
mod orbit_controls;
mod page;
mod scene;
mod scroll;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
pub use orbit_controls::OrbitControlsOptions;
pub use page::PageOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
pub use scroll::ScrollOptions;
use serde::{Deserialize, Serialize};

use crate::error::PlanetscapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and framing positions.
    pub camera: CameraOptions,
    /// Scroll-to-camera sensitivities.
    pub scroll: ScrollOptions,
    /// Per-frame animation steps and the ship orbit.
    pub animation: AnimationOptions,
    /// Debug orbit controller tuning.
    pub orbit_controls: OrbitControlsOptions,
    /// Scene content.
    pub scene: SceneOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Virtual page used by the standalone viewer.
    pub page: PageOptions,
}

impl Options {
    /// Generate JSON Schema describing the tunable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::OptionsParse`] for malformed TOML or
    /// out-of-range scene and orbit-control values, and
    /// [`PlanetscapeError::InvalidKeyChord`] for unusable key bindings.
    pub fn from_toml(content: &str) -> Result<Self, PlanetscapeError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| PlanetscapeError::OptionsParse(e.to_string()))?;
        options.scene.validate()?;
        options.orbit_controls.validate()?;
        options.keybindings.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::Io`] if the file cannot be read, otherwise
    /// the errors of [`Options::from_toml`].
    pub fn load(path: &Path) -> Result<Self, PlanetscapeError> {
        let content =
            std::fs::read_to_string(path).map_err(PlanetscapeError::Io)?;
        Self::from_toml(&content)
    }

    /// Render options as pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::OptionsParse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, PlanetscapeError> {
        toml::to_string_pretty(self)
            .map_err(|e| PlanetscapeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError`] if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), PlanetscapeError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PlanetscapeError::Io)?;
        }
        std::fs::write(path, content).map_err(PlanetscapeError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyAction, Modifiers};

    const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
    };

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml().unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
orbit_speed = 0.05
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.animation.orbit_speed, 0.05);
        // Everything else should be default
        assert_eq!(opts.animation.planet_spin, 0.01);
        assert_eq!(opts.camera.start_position, [0.0, 0.0, 16.5]);
        assert_eq!(opts.scene.star_count, 700);
    }

    #[test]
    fn seeded_starfield_survives_round_trip() {
        let mut opts = Options::default();
        opts.scene.star_seed = Some(42);
        let parsed = Options::from_toml(&opts.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.scene.star_seed, Some(42));
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera\nfovy = 1").unwrap_err();
        assert!(matches!(err, PlanetscapeError::OptionsParse(_)));
    }

    #[test]
    fn infinite_star_spread_is_rejected() {
        let err = Options::from_toml("[scene]\nstar_spread = inf\n").unwrap_err();
        assert!(matches!(err, PlanetscapeError::OptionsParse(_)));
        let err = Options::from_toml("[scene]\nstar_spread = nan\n").unwrap_err();
        assert!(matches!(err, PlanetscapeError::OptionsParse(_)));
    }

    #[test]
    fn inverted_orbit_distances_are_rejected() {
        let toml_str = r"
[orbit_controls]
min_distance = 100.0
max_distance = 50.0
";
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(err.to_string().contains("min_distance"));
    }

    #[test]
    fn unbounded_max_distance_is_allowed() {
        let opts = Options::from_toml("[orbit_controls]\nmax_distance = inf\n").unwrap();
        assert!(opts.orbit_controls.max_distance.is_infinite());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyD", SHIFT),
            Some(KeyAction::ToggleDebug)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyD", Modifiers::default()),
            None
        );
        assert_eq!(opts.keybindings.lookup("KeyZ", SHIFT), None);
    }

    #[test]
    fn rebinding_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
toggle_debug = "Ctrl+F12"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        assert_eq!(
            opts.keybindings.lookup("F12", ctrl),
            Some(KeyAction::ToggleDebug)
        );
        assert_eq!(opts.keybindings.lookup("KeyD", SHIFT), None);
    }

    #[test]
    fn invalid_binding_is_rejected_on_load() {
        let toml_str = r#"
[keybindings.bindings]
toggle_debug = "Shift+"
"#;
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, PlanetscapeError::InvalidKeyChord(_)));
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = std::env::temp_dir().join(format!(
            "planetscape-options-{}",
            std::process::id()
        ));
        let path = dir.join("backdrop.toml");
        let mut opts = Options::default();
        opts.page.length = 1234.0;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("orbit_controls"));
        assert!(props.contains_key("page"));

        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        let scene = &props["scene"]["properties"];
        assert!(scene.get("star_count").is_some());
        assert!(scene.get("planet_texture").is_none());
    }
}
