use bevy::ecs::component::Mutable;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use crate::engine::hologram::look::HologramLook;
use crate::engine::layers::{CaptureView, HologramLayer, LayerDrawContext};
use crate::engine::render::materials::LayerMaterial;

/// Draw every layer of type `L` against its parent look.
///
/// A submitted draw attaches the lattice mesh, the look's bounds and the
/// layer's own material, then makes the layer visible. Skipped draws hide it.
/// The material asset is only written when a parameter actually changed.
pub fn draw_layers<L>(
    mut commands: Commands,
    mut layers: Query<(
        Entity,
        &mut L,
        Option<&ChildOf>,
        &Transform,
        &GlobalTransform,
        &mut Visibility,
        Option<&Mesh3d>,
        Option<&Aabb>,
        Option<&MeshMaterial3d<L::Material>>,
    )>,
    looks: Query<&HologramLook>,
    images: Res<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<L::Material>>,
) where
    L: HologramLayer + Component<Mutability = Mutable>,
{
    for (
        entity,
        mut layer,
        child_of,
        transform,
        global_transform,
        mut visibility,
        current_mesh,
        current_bounds,
        current_material,
    ) in &mut layers
    {
        let Some(look) = child_of.and_then(|child_of| looks.get(child_of.parent()).ok()) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        let capture = look.capture_texture.as_ref().and_then(|texture| {
            images.get(texture).map(|image| CaptureView {
                texture,
                texture_size: image.size(),
            })
        });
        let capture_texture = capture.as_ref().map(|capture| capture.texture.clone());

        let mut ctx = LayerDrawContext {
            transform: global_transform.compute_matrix(),
            local_scale: transform.scale,
            capture,
            bounds: look.bounds,
            meshes: &mut *meshes,
        };

        let (Some(submission), Some(capture_texture)) = (layer.draw(&mut ctx), capture_texture)
        else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        let mut entity_commands = commands.entity(entity);

        if current_mesh.is_none_or(|mesh| mesh.0 != submission.mesh) {
            entity_commands.insert(Mesh3d(submission.mesh.clone()));
        }
        if current_bounds != Some(&submission.bounds) {
            entity_commands.insert(submission.bounds);
        }

        match current_material.filter(|handle| materials.contains(&handle.0)) {
            Some(handle) => {
                let updated = materials.get(&handle.0).and_then(|material| {
                    let mut updated = material.clone();
                    updated.apply_properties(submission.properties, &capture_texture);
                    (updated != *material).then_some(updated)
                });
                if let Some(updated) = updated {
                    if let Some(material) = materials.get_mut(&handle.0) {
                        *material = updated;
                    }
                }
            }
            None => {
                let mut material = L::Material::default();
                material.apply_properties(submission.properties, &capture_texture);
                entity_commands.insert(MeshMaterial3d(materials.add(material)));
            }
        }

        visibility.set_if_neq(Visibility::Inherited);
    }
}
