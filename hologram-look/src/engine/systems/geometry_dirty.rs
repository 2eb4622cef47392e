use bevy::prelude::*;

use crate::engine::hologram::look::HologramLook;
use crate::engine::layers::HologramLayer;
use crate::engine::layers::line_layer::LineLayer;
use crate::engine::layers::point_layer::PointLayer;

/// Mark the layers of every look whose mesh density changed as geometry dirty.
pub fn propagate_geometry_dirty(
    mut looks: Query<(Entity, &mut HologramLook), Changed<HologramLook>>,
    mut line_layers: Query<(&ChildOf, &mut LineLayer)>,
    mut point_layers: Query<(&ChildOf, &mut PointLayer)>,
) {
    let mut dirty_looks = Vec::new();
    for (entity, mut look) in &mut looks {
        if look.mesh_density_changed() {
            look.bypass_change_detection().mark_mesh_density_applied();
            dirty_looks.push(entity);
        }
    }

    if dirty_looks.is_empty() {
        return;
    }

    for (child_of, mut layer) in &mut line_layers {
        if dirty_looks.contains(&child_of.parent()) {
            layer.set_geometry_dirty();
        }
    }
    for (child_of, mut layer) in &mut point_layers {
        if dirty_looks.contains(&child_of.parent()) {
            layer.set_geometry_dirty();
        }
    }

    debug!("Mesh density changed on {} looks", dirty_looks.len());
}
