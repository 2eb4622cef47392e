use std::num::NonZeroU32;

use bevy::prelude::*;
use constants::layer_limits::{
    DEFAULT_LAYER_OPACITY, DEFAULT_LAYER_WIDTH, DEFAULT_LINE_COUNT, DEFAULT_LINE_DENSITY,
    LAYER_WIDTH_MAX, LINE_COUNT_MAX, LINE_DENSITY_MAX, LINE_DENSITY_MIN,
};
use constants::shader_params::{
    LINE_LAYER_SHADER_PATH, LINE_ORIENTATION, MESH_SCALAR, OPACITY, SPRITE, USE_SPRITE, WIDTH,
};

use super::mesh_cache::LatticeMeshCache;
use super::{DrawSubmission, HologramLayer, LayerDrawContext};
use crate::engine::mesh::line_lattice_mesh::{LineOrientation, create_line_lattice_mesh};
use crate::engine::render::draw_params::{line_mesh_scalar, line_width};
use crate::engine::render::materials::HologramLineMaterial;
use crate::engine::render::property_block::LayerPropertyBlock;

/// Settings that determine the line lattice geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLatticeKey {
    pub line_count: u32,
    pub line_density: NonZeroU32,
    pub orientation: LineOrientation,
}

/// Parallel line strips drawn across the capture surface.
///
/// Count, density, opacity and width are clamped by their setters, so a
/// density of zero never reaches the mesh builder.
#[derive(Component, Debug, Clone)]
#[require(Transform, Visibility)]
pub struct LineLayer {
    orientation: LineOrientation,
    line_count: u32,
    line_density: NonZeroU32,
    opacity: f32,
    width: f32,
    sprite: Option<Handle<Image>>,
    enabled: bool,
    cache: LatticeMeshCache<LineLatticeKey>,
    properties: LayerPropertyBlock,
}

impl Default for LineLayer {
    fn default() -> Self {
        let mut layer = Self {
            orientation: LineOrientation::Vertical,
            line_count: 0,
            line_density: NonZeroU32::MIN,
            opacity: 0.0,
            width: 0.0,
            sprite: None,
            enabled: true,
            cache: LatticeMeshCache::default(),
            properties: LayerPropertyBlock::default(),
        };
        layer.set_line_count(DEFAULT_LINE_COUNT);
        layer.set_line_density(DEFAULT_LINE_DENSITY);
        layer.set_opacity(DEFAULT_LAYER_OPACITY);
        layer.set_width(DEFAULT_LAYER_WIDTH);
        layer
    }
}

impl LineLayer {
    pub fn with_orientation(mut self, orientation: LineOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_line_count(mut self, line_count: u32) -> Self {
        self.set_line_count(line_count);
        self
    }

    pub fn with_line_density(mut self, line_density: u32) -> Self {
        self.set_line_density(line_density);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.set_opacity(opacity);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.set_width(width);
        self
    }

    pub fn with_sprite(mut self, sprite: Handle<Image>) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn orientation(&self) -> LineOrientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: LineOrientation) {
        self.orientation = orientation;
    }

    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    pub fn set_line_count(&mut self, line_count: u32) {
        self.line_count = line_count.min(LINE_COUNT_MAX);
    }

    pub fn line_density(&self) -> NonZeroU32 {
        self.line_density
    }

    pub fn set_line_density(&mut self, line_density: u32) {
        let clamped = line_density.clamp(LINE_DENSITY_MIN, LINE_DENSITY_MAX);
        self.line_density = NonZeroU32::new(clamped).unwrap_or(NonZeroU32::MIN);
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.clamp(0.0, LAYER_WIDTH_MAX);
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

    pub fn lattice_key(&self) -> LineLatticeKey {
        LineLatticeKey {
            line_count: self.line_count,
            line_density: self.line_density,
            orientation: self.orientation,
        }
    }

    /// Cached lattice mesh, if it has been built.
    pub fn mesh(&self) -> Option<&Handle<Mesh>> {
        self.cache.mesh()
    }

    pub fn is_geometry_dirty(&self) -> bool {
        self.cache.is_geometry_dirty()
    }
}

impl HologramLayer for LineLayer {
    type Material = HologramLineMaterial;

    fn default_shader_name(&self) -> &'static str {
        LINE_LAYER_SHADER_PATH
    }

    fn draw(&mut self, ctx: &mut LayerDrawContext<'_>) -> Option<DrawSubmission<'_>> {
        let key = self.lattice_key();
        let (mesh, rebuilt) = self.cache.ensure(key, ctx.meshes, |key| {
            create_line_lattice_mesh(key.line_count, key.line_density, key.orientation)
        });
        if rebuilt {
            debug!(
                "Rebuilt line lattice: {} lines x {} segments ({:?})",
                self.line_count, self.line_density, self.orientation
            );
        }

        // The stride depends on the capture resolution.
        let capture = ctx.capture.as_ref()?;

        if !self.enabled || self.opacity <= 0.0 {
            return None;
        }

        self.properties.clear();
        self.properties.set_vector(
            MESH_SCALAR,
            line_mesh_scalar(self.orientation, self.line_density, capture.texture_size),
        );

        if let Some(sprite) = &self.sprite {
            self.properties.set_texture(SPRITE, sprite.clone());
            self.properties.set_float(USE_SPRITE, 1.0);
        } else {
            self.properties.set_float(USE_SPRITE, 0.0);
        }

        self.properties.set_float(
            WIDTH,
            line_width(self.width, self.orientation, ctx.local_scale),
        );
        self.properties.set_float(OPACITY, self.opacity);
        self.properties
            .set_float(LINE_ORIENTATION, self.orientation.shader_value());

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
