//! Shader parameter plumbing for hologram layers.
//!
//! Layers describe their per-draw state as named parameters; the materials
//! turn those into uniforms and texture bindings.

/// Per-draw derived parameters: texel stride and the width curve.
pub mod draw_params;

/// Layer materials bound to the hologram line and point shaders.
pub mod materials;

/// Named per-draw parameter block, reused across frames.
pub mod property_block;
