//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, typed buffers,
//! texture helpers and shader composition.

/// Typed vertex, index, instance and uniform buffers.
pub mod buffer;
/// Shared bind group layout entries and samplers.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Depth and image textures.
pub mod texture;
