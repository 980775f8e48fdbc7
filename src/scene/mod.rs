//! CPU-side scene graph for the backdrop.
//!
//! The [`Scene`] owns every animated object (planet, ship and the skybox
//! once its texture arrives), the static starfield, the debug helper flag,
//! the camera with its orbit controls, and the virtual page. Hosts delegate
//! to it; renderers read it once per frame.

/// Procedural meshes and helper line lists.
pub mod mesh_gen;
/// Virtual page scroll and UI chrome state.
pub mod page;
/// Random starfield placement.
pub mod stars;
/// Object transforms with wrapped Euler rotation.
pub mod transform;

use glam::{DVec3, Vec2};
pub use page::PageState;
pub use transform::Transform;

use crate::camera::{CameraPose, OrbitControls, Projection};
use crate::options::{LightingOptions, Options, SceneOptions};

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Objects whose transforms the animator drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectHandle {
    /// Textured sphere at the origin.
    Planet,
    /// Octahedron on the inclined orbit.
    Ship,
    /// Inward-facing background sphere; absent until its texture loads.
    Skybox,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The authoritative backdrop scene.
pub struct Scene {
    camera: CameraPose,
    projection: Projection,
    orbit_controls: OrbitControls,
    viewport: (u32, u32),
    planet: Transform,
    ship: Transform,
    skybox: Option<Transform>,
    stars: Vec<DVec3>,
    helpers_visible: bool,
    page: PageState,
    lighting: LightingOptions,
    options: SceneOptions,
}

impl Scene {
    /// Build the scene for a `width` x `height` viewport.
    ///
    /// The camera starts at the configured start position facing forward,
    /// the helpers are hidden, the orbit controls are disabled and the
    /// skybox is absent.
    #[must_use]
    pub fn new(options: &Options, width: u32, height: u32) -> Self {
        let mut projection = Projection::from_options(&options.camera, 1.0);
        projection.resize(width, height);

        let scene = &options.scene;
        let stars = stars::scatter_stars(scene.star_count, scene.star_spread, scene.star_seed);

        Self {
            camera: CameraPose::facing_forward(DVec3::from_array(
                options.camera.start_position,
            )),
            projection,
            orbit_controls: OrbitControls::new(options.orbit_controls.clone()),
            viewport: (width, height),
            planet: Transform::default(),
            ship: Transform::at(DVec3::from_array(scene.ship_initial_position)),
            skybox: None,
            stars,
            helpers_visible: false,
            page: PageState::new(options.page.length),
            lighting: options.lighting.clone(),
            options: scene.clone(),
        }
    }

    // -- Camera --

    /// Current camera pose.
    #[must_use]
    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    /// Replace the camera pose.
    pub fn set_camera(&mut self, pose: CameraPose) {
        self.camera = pose;
    }

    /// Perspective projection.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Track a new viewport size. Zero-sized viewports keep the previous
    /// aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.projection.resize(width, height);
    }

    // -- Orbit controls --

    /// Debug orbit controls.
    #[must_use]
    pub fn orbit_controls(&self) -> &OrbitControls {
        &self.orbit_controls
    }

    /// Enable or disable the orbit controls.
    pub fn set_orbit_enabled(&mut self, enabled: bool) {
        self.orbit_controls.set_enabled(enabled);
    }

    /// Point the orbit controls at `target`.
    pub fn set_orbit_target(&mut self, target: DVec3) {
        self.orbit_controls.set_target(target);
    }

    /// Apply pending orbit motion to the camera.
    pub fn update_orbit(&mut self) -> bool {
        self.orbit_controls.update(&mut self.camera)
    }

    /// Queue an orbit rotation for a drag of `delta` pixels.
    pub fn rotate_orbit(&mut self, delta: Vec2) {
        let height = f64::from(self.viewport.1);
        self.orbit_controls.rotate(delta.as_dvec2(), height);
    }

    /// Queue an orbit pan for a drag of `delta` pixels.
    pub fn pan_orbit(&mut self, delta: Vec2) {
        let height = f64::from(self.viewport.1);
        let fovy = f64::from(self.projection.fovy);
        self.orbit_controls
            .pan(delta.as_dvec2(), height, &self.camera, fovy);
    }

    /// Queue an orbit dolly of `notches` wheel steps.
    pub fn dolly_orbit(&mut self, notches: f64) {
        self.orbit_controls.dolly(notches);
    }

    // -- Objects --

    /// Transform of an object, or `None` if it is not in the scene yet.
    #[must_use]
    pub fn transform(&self, handle: ObjectHandle) -> Option<&Transform> {
        match handle {
            ObjectHandle::Planet => Some(&self.planet),
            ObjectHandle::Ship => Some(&self.ship),
            ObjectHandle::Skybox => self.skybox.as_ref(),
        }
    }

    /// Mutable transform of an object, or `None` if it is not in the scene
    /// yet.
    pub fn transform_mut(&mut self, handle: ObjectHandle) -> Option<&mut Transform> {
        match handle {
            ObjectHandle::Planet => Some(&mut self.planet),
            ObjectHandle::Ship => Some(&mut self.ship),
            ObjectHandle::Skybox => self.skybox.as_mut(),
        }
    }

    /// Add the skybox. Returns `false` if it was already present.
    pub fn attach_skybox(&mut self) -> bool {
        if self.skybox.is_some() {
            return false;
        }
        self.skybox = Some(Transform::default());
        true
    }

    /// Whether the skybox has been added.
    #[must_use]
    pub fn has_skybox(&self) -> bool {
        self.skybox.is_some()
    }

    /// Star positions.
    #[must_use]
    pub fn stars(&self) -> &[DVec3] {
        &self.stars
    }

    // -- Helpers and page --

    /// Whether the light and grid helpers are drawn.
    #[must_use]
    pub fn helpers_visible(&self) -> bool {
        self.helpers_visible
    }

    /// Show or hide the light and grid helpers.
    pub fn set_helpers_visible(&mut self, visible: bool) {
        self.helpers_visible = visible;
    }

    /// The virtual page.
    #[must_use]
    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Mutable access to the virtual page.
    pub fn page_mut(&mut self) -> &mut PageState {
        &mut self.page
    }

    // -- Static content --

    /// Light setup.
    #[must_use]
    pub fn lighting(&self) -> &LightingOptions {
        &self.lighting
    }

    /// Content options the scene was built from.
    #[must_use]
    pub fn options(&self) -> &SceneOptions {
        &self.options
    }
}
