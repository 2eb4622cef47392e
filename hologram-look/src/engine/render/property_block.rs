use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ShaderProperty {
    Float(f32),
    Vector(Vec4),
    Texture(Handle<Image>),
}

/// Named shader parameters for one draw of one layer.
///
/// Owned by the layer and cleared rather than reallocated each frame. Setting a
/// name twice overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerPropertyBlock {
    properties: Vec<(&'static str, ShaderProperty)>,
}

impl LayerPropertyBlock {
    pub fn clear(&mut self) {
        self.properties.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn set_float(&mut self, name: &'static str, value: f32) {
        self.set(name, ShaderProperty::Float(value));
    }

    pub fn set_vector(&mut self, name: &'static str, value: Vec4) {
        self.set(name, ShaderProperty::Vector(value));
    }

    pub fn set_texture(&mut self, name: &'static str, texture: Handle<Image>) {
        self.set(name, ShaderProperty::Texture(texture));
    }

    pub fn get(&self, name: &str) -> Option<&ShaderProperty> {
        self.properties
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name) {
            Some(ShaderProperty::Float(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn vector(&self, name: &str) -> Option<Vec4> {
        match self.get(name) {
            Some(ShaderProperty::Vector(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn texture(&self, name: &str) -> Option<&Handle<Image>> {
        match self.get(name) {
            Some(ShaderProperty::Texture(handle)) => Some(handle),
            _ => None,
        }
    }

    fn set(&mut self, name: &'static str, value: ShaderProperty) {
        if let Some(slot) = self.properties.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.properties.push((name, value));
        }
    }
}
