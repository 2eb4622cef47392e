use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use constants::layer_limits::{DEFAULT_MESH_DENSITY, MESH_DENSITY_MAX, MESH_DENSITY_MIN};

use crate::engine::layers::line_layer::LineLayer;
use crate::engine::layers::point_layer::PointLayer;

/// Parent of a set of hologram layers.
#[derive(Component, Debug, Clone)]
#[require(Transform, Visibility)]
pub struct HologramLook {
    /// Capture frame the layers sample. Layers stay hidden until it is loaded.
    pub capture_texture: Option<Handle<Image>>,
    /// Bounds of the capture volume, assigned to every layer mesh.
    pub bounds: Aabb,
    mesh_density: u32,
    /// Density the layers were last marked dirty for.
    applied_mesh_density: u32,
}

impl Default for HologramLook {
    fn default() -> Self {
        Self {
            capture_texture: None,
            bounds: Aabb::from_min_max(Vec3::new(-0.5, -0.5, -0.5), Vec3::new(0.5, 0.5, 0.5)),
            mesh_density: DEFAULT_MESH_DENSITY,
            applied_mesh_density: DEFAULT_MESH_DENSITY,
        }
    }
}

impl HologramLook {
    pub fn new(capture_texture: Handle<Image>, bounds: Aabb) -> Self {
        Self {
            capture_texture: Some(capture_texture),
            bounds,
            ..default()
        }
    }

    pub fn mesh_density(&self) -> u32 {
        self.mesh_density
    }

    pub fn set_mesh_density(&mut self, mesh_density: u32) {
        self.mesh_density = mesh_density.clamp(MESH_DENSITY_MIN, MESH_DENSITY_MAX);
    }

    /// True when the mesh density changed since the layers were last marked dirty.
    pub fn mesh_density_changed(&self) -> bool {
        self.applied_mesh_density != self.mesh_density
    }

    pub fn mark_mesh_density_applied(&mut self) {
        self.applied_mesh_density = self.mesh_density;
    }
}

/// Spawn layers as children of a look entity.
pub trait HologramLookCommandsExt {
    fn add_line_layer(&mut self, layer: LineLayer) -> &mut Self;

    fn add_point_layer(&mut self, layer: PointLayer) -> &mut Self;
}

impl HologramLookCommandsExt for EntityCommands<'_> {
    fn add_line_layer(&mut self, layer: LineLayer) -> &mut Self {
        self.with_child((layer, Name::new("Line Layer")))
    }

    fn add_point_layer(&mut self, layer: PointLayer) -> &mut Self {
        self.with_child((layer, Name::new("Point Layer")))
    }
}
