//! Hologram layers: child entities that draw a procedural lattice over the capture.
//!
//! Every layer caches its mesh, rebuilds it only when its lattice settings
//! change or the geometry is marked dirty, and describes each draw through a
//! reused `LayerPropertyBlock`.

use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use crate::engine::render::materials::LayerMaterial;
use crate::engine::render::property_block::LayerPropertyBlock;

/// Line lattice layer with orientation, count and density.
pub mod line_layer;

/// Memoised lattice mesh keyed by the settings it was built from.
pub mod mesh_cache;

/// Point lattice layer.
pub mod point_layer;

/// Capture data provided by the owning `HologramLook`.
pub struct CaptureView<'a> {
    pub texture: &'a Handle<Image>,
    pub texture_size: UVec2,
}

/// Everything a layer needs from its environment for one draw.
pub struct LayerDrawContext<'a> {
    pub transform: Mat4,
    pub local_scale: Vec3,
    /// `None` while the capture texture is missing or still loading.
    pub capture: Option<CaptureView<'a>>,
    pub bounds: Aabb,
    pub meshes: &'a mut Assets<Mesh>,
}

/// A draw call handed back to the host.
pub struct DrawSubmission<'a> {
    pub mesh: Handle<Mesh>,
    pub transform: Mat4,
    /// Assigned to the mesh entity as-is, never recomputed from the lattice.
    pub bounds: Aabb,
    pub properties: &'a LayerPropertyBlock,
}

pub trait HologramLayer {
    type Material: LayerMaterial;

    fn default_shader_name(&self) -> &'static str;

    /// Ensure the cached mesh and fill the property block.
    ///
    /// Returns `None` when nothing should be drawn this frame: no capture
    /// texture yet, the layer is disabled, or it is fully transparent.
    fn draw(&mut self, ctx: &mut LayerDrawContext<'_>) -> Option<DrawSubmission<'_>>;

    /// Force a rebuild on the next draw regardless of the lattice settings.
    fn set_geometry_dirty(&mut self);
}
