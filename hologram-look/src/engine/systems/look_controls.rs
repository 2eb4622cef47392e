use bevy::prelude::*;

use crate::engine::hologram::look::HologramLook;
use crate::engine::layers::line_layer::LineLayer;

const COUNT_STEP: u32 = 5;
const DENSITY_STEP: u32 = 5;
const MESH_DENSITY_STEP: u32 = 16;

/// Tweak line layers from the keyboard.
///
/// O swaps orientation, Up/Down change the line count, Left/Right the line
/// density, and M cycles the look's mesh density. Opacity changes on 1..=4.
pub fn look_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut line_layers: Query<&mut LineLayer>,
    mut looks: Query<&mut HologramLook>,
) {
    if keyboard.just_pressed(KeyCode::KeyM) {
        for mut look in &mut looks {
            let next = look.mesh_density() + MESH_DENSITY_STEP;
            look.set_mesh_density(if next > 255 { MESH_DENSITY_STEP } else { next });
            info!("Mesh density: {}", look.mesh_density());
        }
    }

    let opacity = [
        (KeyCode::Digit1, 0.0),
        (KeyCode::Digit2, 0.25),
        (KeyCode::Digit3, 0.75),
        (KeyCode::Digit4, 1.0),
    ]
    .into_iter()
    .find(|(key, _)| keyboard.just_pressed(*key))
    .map(|(_, opacity)| opacity);

    for mut layer in &mut line_layers {
        if keyboard.just_pressed(KeyCode::KeyO) {
            let orientation = layer.orientation().swapped();
            layer.set_orientation(orientation);
            info!("Line orientation: {:?}", orientation);
        }

        if keyboard.just_pressed(KeyCode::ArrowUp) {
            let count = layer.line_count() + COUNT_STEP;
            layer.set_line_count(count);
            info!("Line count: {}", layer.line_count());
        }

        if keyboard.just_pressed(KeyCode::ArrowDown) {
            let count = layer.line_count().saturating_sub(COUNT_STEP);
            layer.set_line_count(count);
            info!("Line count: {}", layer.line_count());
        }

        if keyboard.just_pressed(KeyCode::ArrowRight) {
            let density = layer.line_density().get() + DENSITY_STEP;
            layer.set_line_density(density);
            info!("Line density: {}", layer.line_density());
        }

        if keyboard.just_pressed(KeyCode::ArrowLeft) {
            let density = layer.line_density().get().saturating_sub(DENSITY_STEP);
            layer.set_line_density(density);
            info!("Line density: {}", layer.line_density());
        }

        if let Some(opacity) = opacity {
            layer.set_opacity(opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mesh::line_lattice_mesh::LineOrientation;

    fn run_with_key(world: &mut World, key: KeyCode) {
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(key);
        world.insert_resource(input);

        let mut schedule = Schedule::default();
        schedule.add_systems(look_controls);
        schedule.run(world);
    }

    #[test]
    fn keys_adjust_line_layers_within_range() {
        let mut world = World::new();
        let layer = world
            .spawn(LineLayer::default().with_line_count(2).with_line_density(3))
            .id();

        run_with_key(&mut world, KeyCode::KeyO);
        run_with_key(&mut world, KeyCode::ArrowDown);
        run_with_key(&mut world, KeyCode::ArrowLeft);

        let layer = world.get::<LineLayer>(layer).unwrap();
        assert_eq!(layer.orientation(), LineOrientation::Horizontal);
        assert_eq!(layer.line_count(), 0);
        assert_eq!(layer.line_density().get(), 1);
    }

    #[test]
    fn mesh_density_wraps_around() {
        let mut world = World::new();
        let mut look = HologramLook::default();
        look.set_mesh_density(250);
        let look = world.spawn(look).id();

        run_with_key(&mut world, KeyCode::KeyM);

        assert_eq!(world.get::<HologramLook>(look).unwrap().mesh_density(), 16);
    }
}
