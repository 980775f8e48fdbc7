//! Camera system for the backdrop.
//!
//! Provides the camera pose with its forward rule, the perspective
//! projection and GPU uniform, and the damped orbit controls used in debug
//! mode.

/// Projection parameters and GPU uniform types.
pub mod core;
/// Damped pointer-driven orbit controller.
pub mod orbit_controls;
/// Camera position and orientation.
pub mod pose;

pub use self::core::{CameraUniform, Projection};
pub use orbit_controls::OrbitControls;
pub use pose::CameraPose;
