//! Asset loading kept off the frame loop.

mod loader;

pub use loader::{LoadedImage, TextureLoader};
