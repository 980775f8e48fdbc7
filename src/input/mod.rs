//! Input handling: event types, key chords, and the input processor that
//! converts raw window events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions and chord parsing.
pub mod keyboard;
/// Cursor tracking and drag gesture classification.
pub(crate) mod mouse;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{InputEvent, Modifiers, MouseButton};
pub use keyboard::{KeyAction, KeyChord};
pub use processor::InputProcessor;
