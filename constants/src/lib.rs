//! Shared limits, defaults and shader bindings for hologram looks.

/// Clamping ranges and default values for layer and look settings.
pub mod layer_limits;

/// Shader parameter names and asset paths consumed by the layer materials.
pub mod shader_params;
