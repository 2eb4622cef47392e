use std::num::NonZeroU32;

use bevy::prelude::*;
use constants::layer_limits::{
    DEFAULT_LAYER_OPACITY, DEFAULT_LAYER_WIDTH, DEFAULT_POINT_DENSITY, LAYER_WIDTH_MAX,
    POINT_DENSITY_MAX, POINT_DENSITY_MIN,
};
use constants::shader_params::{
    MESH_SCALAR, OPACITY, POINT_LAYER_SHADER_PATH, SPRITE, USE_SPRITE, WIDTH,
};

use super::mesh_cache::LatticeMeshCache;
use super::{DrawSubmission, HologramLayer, LayerDrawContext};
use crate::engine::mesh::point_lattice_mesh::create_point_lattice_mesh;
use crate::engine::render::draw_params::{point_mesh_scalar, point_width};
use crate::engine::render::materials::HologramPointMaterial;
use crate::engine::render::property_block::LayerPropertyBlock;

/// Regular grid of points sampled from the capture.
#[derive(Component, Debug, Clone)]
#[require(Transform, Visibility)]
pub struct PointLayer {
    point_density: NonZeroU32,
    opacity: f32,
    size: f32,
    sprite: Option<Handle<Image>>,
    enabled: bool,
    cache: LatticeMeshCache<NonZeroU32>,
    properties: LayerPropertyBlock,
}

impl Default for PointLayer {
    fn default() -> Self {
        let mut layer = Self {
            point_density: NonZeroU32::MIN,
            opacity: 0.0,
            size: 0.0,
            sprite: None,
            enabled: true,
            cache: LatticeMeshCache::default(),
            properties: LayerPropertyBlock::default(),
        };
        layer.set_point_density(DEFAULT_POINT_DENSITY);
        layer.set_opacity(DEFAULT_LAYER_OPACITY);
        layer.set_size(DEFAULT_LAYER_WIDTH);
        layer
    }
}

impl PointLayer {
    pub fn with_point_density(mut self, point_density: u32) -> Self {
        self.set_point_density(point_density);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.set_opacity(opacity);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.set_size(size);
        self
    }

    pub fn with_sprite(mut self, sprite: Handle<Image>) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn point_density(&self) -> NonZeroU32 {
        self.point_density
    }

    pub fn set_point_density(&mut self, point_density: u32) {
        let clamped = point_density.clamp(POINT_DENSITY_MIN, POINT_DENSITY_MAX);
        self.point_density = NonZeroU32::new(clamped).unwrap_or(NonZeroU32::MIN);
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size.clamp(0.0, LAYER_WIDTH_MAX);
    }

    pub fn sprite(&self) -> Option<&Handle<Image>> {
        self.sprite.as_ref()
    }

    pub fn set_sprite(&mut self, sprite: Option<Handle<Image>>) {
        self.sprite = sprite;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn mesh(&self) -> Option<&Handle<Mesh>> {
        self.cache.mesh()
    }

    pub fn is_geometry_dirty(&self) -> bool {
        self.cache.is_geometry_dirty()
    }
}

impl HologramLayer for PointLayer {
    type Material = HologramPointMaterial;

    fn default_shader_name(&self) -> &'static str {
        POINT_LAYER_SHADER_PATH
    }

    fn draw(&mut self, ctx: &mut LayerDrawContext<'_>) -> Option<DrawSubmission<'_>> {
        let (mesh, rebuilt) =
            self.cache
                .ensure(self.point_density, ctx.meshes, create_point_lattice_mesh);
        if rebuilt {
            debug!("Rebuilt point lattice: {0} x {0} points", self.point_density);
        }

        let capture = ctx.capture.as_ref()?;

        if !self.enabled || self.opacity <= 0.0 {
            return None;
        }

        self.properties.clear();
        self.properties.set_vector(
            MESH_SCALAR,
            point_mesh_scalar(self.point_density, capture.texture_size),
        );

        if let Some(sprite) = &self.sprite {
            self.properties.set_texture(SPRITE, sprite.clone());
            self.properties.set_float(USE_SPRITE, 1.0);
        } else {
            self.properties.set_float(USE_SPRITE, 0.0);
        }

        self.properties
            .set_float(WIDTH, point_width(self.size, ctx.local_scale));
        self.properties.set_float(OPACITY, self.opacity);

        Some(DrawSubmission {
            mesh,
            transform: ctx.transform,
            bounds: ctx.bounds,
            properties: &self.properties,
        })
    }

    fn set_geometry_dirty(&mut self) {
        self.cache.set_geometry_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::layers::CaptureView;
    use bevy::render::primitives::Aabb;

    #[test]
    fn density_is_clamped() {
        let mut layer = PointLayer::default();
        layer.set_point_density(0);
        assert_eq!(layer.point_density().get(), 1);
        layer.set_point_density(9000);
        assert_eq!(layer.point_density().get(), 255);
    }

    #[test]
    fn draw_builds_lattice_and_parameters() {
        let mut meshes = Assets::<Mesh>::default();
        let capture = Handle::<Image>::default();
        let mut layer = PointLayer::default().with_point_density(8);

        let mut ctx = LayerDrawContext {
            transform: Mat4::IDENTITY,
            local_scale: Vec3::ONE,
            capture: Some(CaptureView {
                texture: &capture,
                texture_size: UVec2::new(256, 256),
            }),
            bounds: Aabb::from_min_max(Vec3::ZERO, Vec3::ONE),
            meshes: &mut meshes,
        };
        let submission = layer.draw(&mut ctx).unwrap();

        assert_eq!(
            submission.properties.vector(MESH_SCALAR),
            Some(Vec4::new(32.0, 16.0, 0.0, 0.0))
        );
        assert_eq!(submission.properties.float(OPACITY), Some(0.75));
        assert_eq!(submission.properties.float(USE_SPRITE), Some(0.0));
        let mesh = submission.mesh.clone();
        assert_eq!(meshes.get(&mesh).unwrap().count_vertices(), 64);
    }

    #[test]
    fn transparent_layer_skips() {
        let mut meshes = Assets::<Mesh>::default();
        let capture = Handle::<Image>::default();
        let mut layer = PointLayer::default().with_opacity(-1.0);

        let mut ctx = LayerDrawContext {
            transform: Mat4::IDENTITY,
            local_scale: Vec3::ONE,
            capture: Some(CaptureView {
                texture: &capture,
                texture_size: UVec2::ONE,
            }),
            bounds: Aabb::default(),
            meshes: &mut meshes,
        };
        assert!(layer.draw(&mut ctx).is_none());
        assert!(layer.mesh().is_some());
    }
}
