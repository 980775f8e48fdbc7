//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation (a key chord, a wheel notch, a drag, or a
//! programmatic scroll from an embedding page) is represented as a
//! `SceneCommand`. Consumers construct commands and pass them to
//! [`BackdropEngine::execute`](super::BackdropEngine::execute).

use glam::Vec2;

/// A single operation on the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// Switch between scroll and debug camera modes.
    ToggleDebug,
    /// Mouse wheel. Scrolls the page in scroll mode and dollies the orbit
    /// camera in debug mode. Positive notches scroll up / zoom in.
    Wheel {
        /// Wheel notches (fractional for touchpads).
        notches: f32,
    },
    /// Scroll the page to an absolute position in pixels from the top.
    ScrollTo {
        /// Target scroll position, clamped to the page.
        scroll_y: f64,
    },
    /// Rotate the orbit camera by a drag of `delta` pixels.
    RotateOrbit {
        /// Cursor movement in physical pixels.
        delta: Vec2,
    },
    /// Pan the orbit camera by a drag of `delta` pixels.
    PanOrbit {
        /// Cursor movement in physical pixels.
        delta: Vec2,
    },
}
