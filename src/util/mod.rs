//! Shared utilities for the frame loop.

/// Frame pacing and FPS smoothing.
pub mod frame_timing;
