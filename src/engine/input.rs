//! Input and command execution for BackdropEngine

use super::{BackdropEngine, BackdropHost, SceneCommand};
use crate::animation::Mode;
use crate::input::{InputEvent, InputProcessor};

impl<H: BackdropHost> BackdropEngine<H> {
    /// Process a platform-agnostic input event.
    ///
    /// Returns `true` if the event produced a command.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match self.input.handle_event(event) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Process a key press named like winit's `KeyCode` debug output
    /// (`"KeyD"`, `"F12"`), combined with the held modifiers.
    ///
    /// Returns `true` if the key was bound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        match self.input.handle_key_press(key) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// The input processor (cursor, held buttons, key bindings).
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Forget held buttons, e.g. when the window loses focus mid-drag.
    pub fn release_pointer(&mut self) {
        self.input.release_mouse_state();
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::ToggleDebug => self.animator.toggle_mode(),
            SceneCommand::Wheel { notches } => self.wheel(f64::from(notches)),
            SceneCommand::ScrollTo { scroll_y } => {
                self.animator
                    .host_mut()
                    .scene_mut()
                    .page_mut()
                    .scroll_to(scroll_y);
                self.sync_scroll();
            }
            SceneCommand::RotateOrbit { delta } => {
                self.animator.host_mut().scene_mut().rotate_orbit(delta);
            }
            SceneCommand::PanOrbit { delta } => {
                self.animator.host_mut().scene_mut().pan_orbit(delta);
            }
        }
    }

    /// Wheel notches scroll the page in scroll mode and dolly the orbit
    /// camera in debug mode.
    fn wheel(&mut self, notches: f64) {
        match self.animator.mode() {
            Mode::Scroll => {
                let step = self.options.page.wheel_step;
                self.animator
                    .host_mut()
                    .scene_mut()
                    .page_mut()
                    .scroll_by(-notches * step);
                self.sync_scroll();
            }
            Mode::Debug => self.animator.host_mut().scene_mut().dolly_orbit(notches),
        }
    }

    /// Hand the current page offset to the animator.
    fn sync_scroll(&mut self) {
        let offset = self.scene().page().scroll_offset();
        self.animator.on_scroll(offset);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::{DVec3, Vec2};

    use crate::animation::{HeadlessHost, Mode};
    use crate::camera::CameraPose;
    use crate::engine::{BackdropEngine, SceneCommand};
    use crate::input::{InputEvent, Modifiers, MouseButton};
    use crate::options::Options;

    fn engine() -> BackdropEngine<HeadlessHost> {
        let mut options = Options::default();
        options.scene.star_seed = Some(1);
        BackdropEngine::headless(options)
    }

    fn shift() -> InputEvent {
        InputEvent::ModifiersChanged(Modifiers {
            shift: true,
            ..Modifiers::default()
        })
    }

    #[test]
    fn wheel_down_scrolls_page_and_moves_camera() {
        let mut engine = engine();
        assert!(engine.handle_input(InputEvent::Wheel { delta: -2.0 }));

        assert_eq!(engine.scene().page().scroll_y(), 200.0);
        let expected = DVec3::new(0.0, 0.0, 16.5) + DVec3::new(0.075, 0.002, -0.1) * -200.0;
        assert_abs_diff_eq!(engine.scene().camera().position, expected, epsilon = 1e-9);
        assert_eq!(
            engine.scene().camera().orientation,
            CameraPose::facing_forward(expected).orientation
        );
    }

    #[test]
    fn wheel_up_at_top_is_clamped() {
        let mut engine = engine();
        let _ = engine.handle_input(InputEvent::Wheel { delta: 3.0 });
        assert_eq!(engine.scene().page().scroll_y(), 0.0);
        assert_eq!(engine.scene().camera().position, DVec3::new(0.0, 0.0, 16.5));
    }

    #[test]
    fn scroll_to_clamps_to_page_length() {
        let mut engine = engine();
        engine.execute(SceneCommand::ScrollTo { scroll_y: 1.0e9 });
        assert_eq!(engine.scene().page().scroll_y(), 4000.0);
    }

    #[test]
    fn shift_d_toggles_debug() {
        let mut engine = engine();
        assert!(!engine.handle_key_press("KeyD"));
        assert_eq!(engine.mode(), Mode::Scroll);

        let _ = engine.handle_input(shift());
        assert!(engine.handle_key_press("KeyD"));
        assert_eq!(engine.mode(), Mode::Debug);
        assert!(!engine.ui_chrome_visible());
        assert!(engine.scene().helpers_visible());

        assert!(engine.handle_key_press("KeyD"));
        assert_eq!(engine.mode(), Mode::Scroll);
        assert!(engine.ui_chrome_visible());
    }

    #[test]
    fn wheel_in_debug_zooms_instead_of_scrolling() {
        let mut engine = engine();
        engine.execute(SceneCommand::ToggleDebug);
        engine.execute(SceneCommand::Wheel { notches: 4.0 });
        assert_eq!(engine.scene().page().scroll_y(), 0.0);

        for _ in 0..300 {
            engine.frame();
        }
        let distance = engine.scene().camera().position.length();
        assert!(distance < 40.0, "distance = {distance}");
    }

    #[test]
    fn scroll_while_in_debug_leaves_camera_alone() {
        let mut engine = engine();
        engine.execute(SceneCommand::ToggleDebug);
        let before = engine.scene().camera();
        engine.execute(SceneCommand::ScrollTo { scroll_y: 500.0 });
        assert_eq!(engine.scene().camera(), before);
    }

    #[test]
    fn leaving_debug_resets_scroll_and_camera() {
        let mut engine = engine();
        engine.execute(SceneCommand::ScrollTo { scroll_y: 800.0 });
        engine.execute(SceneCommand::ToggleDebug);
        engine.execute(SceneCommand::ToggleDebug);
        assert_eq!(engine.scene().page().scroll_y(), 0.0);
        assert_eq!(
            engine.scene().camera(),
            CameraPose::facing_forward(DVec3::new(0.0, 0.0, 16.5))
        );
    }

    #[test]
    fn drag_orbits_only_in_debug() {
        let mut engine = engine();
        let _ = engine.handle_input(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        let _ = engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let _ = engine.handle_input(InputEvent::CursorMoved { x: 300.0, y: 100.0 });
        engine.frame();
        assert_eq!(engine.scene().camera().position.x, 0.0);

        engine.execute(SceneCommand::ToggleDebug);
        engine.execute(SceneCommand::RotateOrbit {
            delta: Vec2::new(200.0, 0.0),
        });
        engine.frame();
        assert!(engine.scene().camera().position.x < 0.0);
        assert_abs_diff_eq!(engine.scene().camera().position.length(), 40.0, epsilon = 1e-9);
    }

    #[test]
    fn every_frame_ticks_once() {
        let mut engine = engine();
        for _ in 0..10 {
            engine.frame();
        }
        assert_eq!(engine.animator().host().frames_rendered, 10);
        assert_abs_diff_eq!(engine.animator().orbit().angle, 0.2, epsilon = 1e-12);
    }
}
