//! Scene animation: the camera-mode state machine, the ship's orbit and the
//! host abstraction they drive.

mod animator;
mod headless;
mod host;
mod orbit;

pub use animator::{Mode, SceneAnimator};
pub use headless::HeadlessHost;
pub use host::SceneHost;
pub use orbit::OrbitState;
