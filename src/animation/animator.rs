//! Camera-mode state machine and per-frame scene update.

use glam::DVec3;

use super::host::SceneHost;
use super::orbit::OrbitState;
use crate::camera::CameraPose;
use crate::options::{AnimationOptions, Options, ScrollOptions};
use crate::scene::ObjectHandle;

/// Who drives the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Page scroll drives the camera; it always faces along −Z.
    #[default]
    Scroll,
    /// Orbit controls drive the camera around the origin; helpers shown,
    /// page UI hidden.
    Debug,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Scroll => Self::Debug,
            Self::Debug => Self::Scroll,
        }
    }
}

/// Drives the backdrop through a [`SceneHost`].
///
/// Owns the camera mode and the ship's orbit. Scroll input moves the camera
/// only in [`Mode::Scroll`]; [`toggle_mode`](Self::toggle_mode) switches to
/// orbit-controlled [`Mode::Debug`] and back; [`tick`](Self::tick) advances
/// the ambient motion and renders one frame.
pub struct SceneAnimator<H: SceneHost> {
    host: H,
    mode: Mode,
    orbit: OrbitState,
    start_camera_position: DVec3,
    debug_camera_position: DVec3,
    debug_helpers_visible: bool,
    animation: AnimationOptions,
    scroll: ScrollOptions,
}

impl<H: SceneHost> SceneAnimator<H> {
    /// Take ownership of `host` and put it in the initial scroll-mode
    /// state: camera at the start position facing forward, helpers hidden,
    /// orbit controls disabled, page UI shown.
    #[must_use]
    pub fn new(mut host: H, options: &Options) -> Self {
        let start_camera_position = DVec3::from_array(options.camera.start_position);

        host.set_camera_pose(CameraPose::facing_forward(start_camera_position));
        host.set_helpers_visible(false);
        host.set_orbit_enabled(false);
        host.set_ui_chrome_visible(true);

        Self {
            host,
            mode: Mode::Scroll,
            orbit: OrbitState::from_options(&options.animation),
            start_camera_position,
            debug_camera_position: DVec3::from_array(options.camera.debug_position),
            debug_helpers_visible: false,
            animation: options.animation.clone(),
            scroll: options.scroll.clone(),
        }
    }

    /// Current camera mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Ship orbit state.
    #[must_use]
    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    /// Where the camera rests at the top of the page.
    #[must_use]
    pub fn start_camera_position(&self) -> DVec3 {
        self.start_camera_position
    }

    /// Whether the debug helpers are currently shown.
    #[must_use]
    pub fn debug_helpers_visible(&self) -> bool {
        self.debug_helpers_visible
    }

    /// The driven host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the driven host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give the host back.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Follow the page scroll. `scroll_offset` is the page top's position
    /// relative to the viewport. Ignored in debug mode.
    pub fn on_scroll(&mut self, scroll_offset: f64) {
        if self.mode == Mode::Debug {
            return;
        }
        let drift = DVec3::from_array(self.scroll.sensitivity()) * scroll_offset;
        self.host
            .set_camera_pose(CameraPose::facing_forward(self.start_camera_position + drift));
    }

    /// Switch between scroll and debug mode.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        match self.mode {
            Mode::Debug => self.enter_debug(),
            Mode::Scroll => self.enter_scroll(),
        }
        log::debug!("camera mode: {:?}", self.mode);
    }

    fn enter_debug(&mut self) {
        self.set_helpers_visible(true);
        self.host.set_orbit_enabled(true);
        self.host.set_orbit_target(DVec3::ZERO);
        self.host.set_ui_chrome_visible(false);

        let mut pose = self.host.camera_pose();
        pose.position = self.debug_camera_position;
        self.host.set_camera_pose(pose);
        self.host.update_orbit();
    }

    fn enter_scroll(&mut self) {
        self.set_helpers_visible(false);
        self.host.set_orbit_enabled(false);
        self.host.set_ui_chrome_visible(true);
        self.host.scroll_to_top();

        self.host
            .set_camera_pose(CameraPose::facing_forward(self.start_camera_position));
        let offset = self.host.scroll_offset();
        self.on_scroll(offset);
    }

    fn set_helpers_visible(&mut self, visible: bool) {
        self.debug_helpers_visible = visible;
        self.host.set_helpers_visible(visible);
    }

    /// Advance the ambient motion by one frame and render it.
    pub fn tick(&mut self) {
        let animation = &self.animation;

        if let Some(planet) = self.host.transform_mut(ObjectHandle::Planet) {
            planet.rotate(DVec3::new(0.0, animation.planet_spin, 0.0));
        }

        if let Some(skybox) = self.host.transform_mut(ObjectHandle::Skybox) {
            skybox.rotate(DVec3::splat(animation.skybox_drift));
        }

        let ship_position = self.orbit.advance();
        if let Some(ship) = self.host.transform_mut(ObjectHandle::Ship) {
            ship.position = ship_position;
            ship.rotate(DVec3::new(0.0, 0.0, animation.ship_spin));
        }

        if self.mode == Mode::Debug {
            self.host.update_orbit();
        }

        self.host.render();
    }
}
