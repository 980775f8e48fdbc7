use super::event::MouseButton;

/// Camera gesture performed by the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragGesture {
    /// Swing the camera around the orbit target.
    Rotate,
    /// Slide the orbit target in the view plane.
    Pan,
}

/// Tracks cursor position and which buttons are held.
pub(crate) struct PointerState {
    pub mouse_pos: (f32, f32),
    /// Set once a position has been seen, so the first motion event does not
    /// produce a jump from the origin.
    has_position: bool,
    left: bool,
    right: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            mouse_pos: (0.0, 0.0),
            has_position: false,
            left: false,
            right: false,
        }
    }

    /// Move the cursor and return the delta from the previous position.
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) -> (f32, f32) {
        let delta = if self.has_position {
            (x - self.mouse_pos.0, y - self.mouse_pos.1)
        } else {
            (0.0, 0.0)
        };
        self.mouse_pos = (x, y);
        self.has_position = true;
        delta
    }

    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Middle => {}
        }
    }

    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    /// Gesture for the buttons currently held. Shift turns a left drag into
    /// a pan.
    pub fn gesture(&self, shift_held: bool) -> Option<DragGesture> {
        match (self.left, self.right) {
            (true, false) if !shift_held => Some(DragGesture::Rotate),
            (true, _) | (false, true) => Some(DragGesture::Pan),
            (false, false) => None,
        }
    }
}
