// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Animated planet backdrop built on wgpu.
//!
//! Planetscape draws a spinning textured planet, a random starfield, a small
//! ship on an inclined orbit and a slowly drifting skybox. The camera follows
//! page scroll; a hidden debug mode (Shift+D by default) hands it to a damped
//! orbit controller and shows light and grid helpers.
//!
//! # Key entry points
//!
//! - [`animation::SceneAnimator`] - camera-mode state machine and per-frame
//!   update, generic over any [`animation::SceneHost`]
//! - [`animation::HeadlessHost`] - GPU-free host for tests and tooling
//! - [`engine::BackdropEngine`] - the wgpu-backed engine that owns an animator
//!   and executes [`engine::SceneCommand`]s
//! - [`options::Options`] - TOML-backed tuning for every constant
//!
//! # Architecture
//!
//! Everything runs on the frame loop's thread. Input events pass through an
//! [`input::InputProcessor`] that turns them into commands; each redraw polls
//! the background texture loader, advances the animator by one tick and
//! renders exactly one frame.

pub mod animation;
pub mod assets;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use animation::{HeadlessHost, Mode, SceneAnimator, SceneHost};
pub use engine::{BackdropEngine, SceneCommand};
pub use error::PlanetscapeError;
pub use input::{InputEvent, InputProcessor, KeyAction, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
