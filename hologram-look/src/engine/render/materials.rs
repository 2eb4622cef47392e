/// Hologram layer materials fed from a `LayerPropertyBlock`
use bevy::render::render_resource::ShaderType;
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};
use constants::shader_params::{
    LINE_LAYER_SHADER_PATH, LINE_ORIENTATION, MESH_SCALAR, OPACITY, POINT_LAYER_SHADER_PATH,
    SPRITE, USE_SPRITE, WIDTH,
};

use super::property_block::LayerPropertyBlock;

/// Uniform block shared by the line and point shaders.
#[derive(Debug, Clone, Copy, Default, PartialEq, ShaderType)]
#[repr(C)]
pub struct LayerUniform {
    pub mesh_scalar: Vec4,
    pub width: f32,
    pub opacity: f32,
    pub use_sprite: f32,
    pub line_orientation: f32,
}

impl LayerUniform {
    /// Read the named parameters of a draw. Missing names keep their current value.
    pub fn apply(&mut self, block: &LayerPropertyBlock) {
        if let Some(mesh_scalar) = block.vector(MESH_SCALAR) {
            self.mesh_scalar = mesh_scalar;
        }
        if let Some(width) = block.float(WIDTH) {
            self.width = width;
        }
        if let Some(opacity) = block.float(OPACITY) {
            self.opacity = opacity;
        }
        if let Some(use_sprite) = block.float(USE_SPRITE) {
            self.use_sprite = use_sprite;
        }
        if let Some(orientation) = block.float(LINE_ORIENTATION) {
            self.line_orientation = orientation;
        }
    }
}

/// Material owned by a single layer entity.
pub trait LayerMaterial: Material + Default + Clone + PartialEq {
    /// Copy the draw parameters and the capture texture into the material.
    fn apply_properties(&mut self, block: &LayerPropertyBlock, capture_texture: &Handle<Image>);
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default, PartialEq)]
pub struct HologramLineMaterial {
    #[uniform(0)]
    pub params: LayerUniform,

    #[texture(1)]
    #[sampler(2)]
    pub capture_texture: Option<Handle<Image>>,

    #[texture(3)]
    #[sampler(4)]
    pub sprite: Option<Handle<Image>>,
}

impl Material for HologramLineMaterial {
    fn vertex_shader() -> ShaderRef {
        LINE_LAYER_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        LINE_LAYER_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }
}

impl LayerMaterial for HologramLineMaterial {
    fn apply_properties(&mut self, block: &LayerPropertyBlock, capture_texture: &Handle<Image>) {
        self.params.apply(block);
        self.capture_texture = Some(capture_texture.clone());
        self.sprite = block.texture(SPRITE).cloned();
    }
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default, PartialEq)]
pub struct HologramPointMaterial {
    #[uniform(0)]
    pub params: LayerUniform,

    #[texture(1)]
    #[sampler(2)]
    pub capture_texture: Option<Handle<Image>>,

    #[texture(3)]
    #[sampler(4)]
    pub sprite: Option<Handle<Image>>,
}

impl Material for HologramPointMaterial {
    fn vertex_shader() -> ShaderRef {
        POINT_LAYER_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        POINT_LAYER_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }
}

impl LayerMaterial for HologramPointMaterial {
    fn apply_properties(&mut self, block: &LayerPropertyBlock, capture_texture: &Handle<Image>) {
        self.params.apply(block);
        self.capture_texture = Some(capture_texture.clone());
        self.sprite = block.texture(SPRITE).cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_reads_named_parameters() {
        let mut block = LayerPropertyBlock::default();
        block.set_vector(MESH_SCALAR, Vec4::new(0.0, 4.0, 0.0, 0.0));
        block.set_float(WIDTH, 0.002);
        block.set_float(OPACITY, 0.5);
        block.set_float(USE_SPRITE, 0.0);
        block.set_float(LINE_ORIENTATION, 1.0);

        let mut material = HologramLineMaterial::default();
        let capture = Handle::<Image>::default();
        material.apply_properties(&block, &capture);

        assert_eq!(
            material.params,
            LayerUniform {
                mesh_scalar: Vec4::new(0.0, 4.0, 0.0, 0.0),
                width: 0.002,
                opacity: 0.5,
                use_sprite: 0.0,
                line_orientation: 1.0,
            }
        );
        assert_eq!(material.capture_texture, Some(capture));
        assert_eq!(material.sprite, None);
    }

    #[test]
    fn sprite_is_unbound_when_block_has_none() {
        let mut material = HologramPointMaterial {
            sprite: Some(Handle::default()),
            ..default()
        };
        material.apply_properties(&LayerPropertyBlock::default(), &Handle::default());
        assert_eq!(material.sprite, None);
    }
}
