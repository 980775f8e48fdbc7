//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held buttons, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and the engine's
//! [`execute`](crate::engine::BackdropEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, Modifiers};
use super::keyboard::KeyAction;
use super::mouse::{DragGesture, PointerState};
use crate::engine::SceneCommand;
use crate::options::KeybindingOptions;

impl KeyAction {
    /// The command this action stands for.
    #[must_use]
    pub fn to_command(self) -> SceneCommand {
        match self {
            Self::ToggleDebug => SceneCommand::ToggleDebug,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`SceneCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyD") {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Cursor tracking and held buttons.
    pointer: PointerState,
    /// Modifier keys currently held.
    modifiers: Modifiers,
    /// Chord → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            pointer: PointerState::new(),
            modifiers: Modifiers::default(),
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.pointer.mouse_pos
    }

    /// Modifier keys currently held.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Forget held buttons, e.g. when the window loses focus mid-drag.
    pub fn release_mouse_state(&mut self) {
        self.pointer.release_all();
    }

    /// Look up a key press (with the currently held modifiers) and return
    /// the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<SceneCommand> {
        self.key_bindings
            .lookup(key, self.modifiers)
            .map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.pointer.set_button(button, pressed);
                None
            }
            InputEvent::Wheel { delta } => {
                (delta != 0.0).then_some(SceneCommand::Wheel { notches: delta })
            }
            InputEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
                None
            }
        }
    }

    /// Cursor moved: compute the delta and emit an orbit command while dragging.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<SceneCommand> {
        let (delta_x, delta_y) = self.pointer.handle_mouse_position(x, y);
        let delta = Vec2::new(delta_x, delta_y);
        if delta == Vec2::ZERO {
            return None;
        }

        match self.pointer.gesture(self.modifiers.shift)? {
            DragGesture::Rotate => Some(SceneCommand::RotateOrbit { delta }),
            DragGesture::Pan => Some(SceneCommand::PanOrbit { delta }),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    fn press(processor: &mut InputProcessor, button: MouseButton) {
        assert_eq!(
            processor.handle_event(InputEvent::MouseButton {
                button,
                pressed: true,
            }),
            None
        );
    }

    #[test]
    fn hover_without_buttons_is_ignored() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 }),
            None
        );
        assert_eq!(
            processor.handle_event(InputEvent::CursorMoved { x: 5.0, y: 9.0 }),
            None
        );
        assert_eq!(processor.mouse_pos(), (5.0, 9.0));
    }

    #[test]
    fn left_drag_rotates_and_shift_drag_pans() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        press(&mut processor, MouseButton::Left);

        assert_eq!(
            processor.handle_event(InputEvent::CursorMoved { x: 14.0, y: 7.0 }),
            Some(SceneCommand::RotateOrbit {
                delta: Vec2::new(4.0, -3.0)
            })
        );

        let _ = processor.handle_event(InputEvent::ModifiersChanged(Modifiers {
            shift: true,
            ..Modifiers::default()
        }));
        assert_eq!(
            processor.handle_event(InputEvent::CursorMoved { x: 15.0, y: 7.0 }),
            Some(SceneCommand::PanOrbit {
                delta: Vec2::new(1.0, 0.0)
            })
        );
    }

    #[test]
    fn right_drag_pans() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        press(&mut processor, MouseButton::Right);
        assert_eq!(
            processor.handle_event(InputEvent::CursorMoved { x: 0.0, y: 2.0 }),
            Some(SceneCommand::PanOrbit {
                delta: Vec2::new(0.0, 2.0)
            })
        );
    }

    #[test]
    fn wheel_becomes_wheel_command() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(InputEvent::Wheel { delta: -2.0 }),
            Some(SceneCommand::Wheel { notches: -2.0 })
        );
        assert_eq!(processor.handle_event(InputEvent::Wheel { delta: 0.0 }), None);
    }

    #[test]
    fn shift_d_toggles_debug() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.handle_key_press("KeyD"), None);

        let _ = processor.handle_event(InputEvent::ModifiersChanged(Modifiers {
            shift: true,
            ..Modifiers::default()
        }));
        assert_eq!(
            processor.handle_key_press("KeyD"),
            Some(SceneCommand::ToggleDebug)
        );
        assert_eq!(processor.handle_key_press("KeyS"), None);
    }
}
