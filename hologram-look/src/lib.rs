//! Procedural hologram looks for volumetric captures.
//!
//! A `HologramLook` entity owns a capture texture and bounds; its child layers
//! generate line or point lattices and draw them with the hologram shaders.
//! Lattice meshes are cached per layer and only rebuilt when their geometry
//! settings change or the look marks them dirty.

use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::shader_params::LOOK_PRESET_EXTENSION;

pub mod engine;

use engine::hologram::preset::{LookPreset, apply_look_presets};
use engine::layers::line_layer::LineLayer;
use engine::layers::point_layer::PointLayer;
use engine::render::materials::{HologramLineMaterial, HologramPointMaterial};
use engine::systems::draw_layers::draw_layers;
use engine::systems::geometry_dirty::propagate_geometry_dirty;

pub mod prelude {
    pub use crate::HologramLookPlugin;
    pub use crate::engine::hologram::look::{HologramLook, HologramLookCommandsExt};
    pub use crate::engine::hologram::preset::{LookPreset, PendingLookPreset};
    pub use crate::engine::layers::HologramLayer;
    pub use crate::engine::layers::line_layer::LineLayer;
    pub use crate::engine::layers::point_layer::PointLayer;
    pub use crate::engine::mesh::line_lattice_mesh::LineOrientation;
}

/// Systems that keep layer meshes and materials in sync each frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct HologramLookSystems;

pub struct HologramLookPlugin;

impl Plugin for HologramLookPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            MaterialPlugin::<HologramLineMaterial>::default(),
            MaterialPlugin::<HologramPointMaterial>::default(),
            JsonAssetPlugin::<LookPreset>::new(&[LOOK_PRESET_EXTENSION]),
        ))
        .add_systems(
            Update,
            (
                apply_look_presets,
                propagate_geometry_dirty,
                (draw_layers::<LineLayer>, draw_layers::<PointLayer>),
            )
                .chain()
                .in_set(HologramLookSystems),
        );
    }
}
