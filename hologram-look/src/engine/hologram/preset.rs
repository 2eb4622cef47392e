use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::layer_limits::{
    DEFAULT_LAYER_OPACITY, DEFAULT_LAYER_WIDTH, DEFAULT_LINE_COUNT, DEFAULT_LINE_DENSITY,
    DEFAULT_MESH_DENSITY, DEFAULT_POINT_DENSITY,
};
use serde::{Deserialize, Serialize};

use super::look::{HologramLook, HologramLookCommandsExt};
use crate::engine::layers::line_layer::LineLayer;
use crate::engine::layers::point_layer::PointLayer;
use crate::engine::mesh::line_lattice_mesh::LineOrientation;

/// Look configuration stored as `*.look.json`.
///
/// Omitted fields take the layer defaults; out-of-range values are clamped
/// when the layers are created.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookPreset {
    #[serde(default = "default_mesh_density")]
    pub mesh_density: u32,
    #[serde(default)]
    pub line_layers: Vec<LineLayerPreset>,
    #[serde(default)]
    pub point_layers: Vec<PointLayerPreset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLayerPreset {
    #[serde(default)]
    pub orientation: LineOrientation,
    #[serde(default = "default_line_count")]
    pub line_count: u32,
    #[serde(default = "default_line_density")]
    pub line_density: u32,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default = "default_width")]
    pub width: f32,
    /// Asset path of the sprite image.
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLayerPreset {
    #[serde(default = "default_point_density")]
    pub point_density: u32,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default = "default_width")]
    pub size: f32,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_mesh_density() -> u32 {
    DEFAULT_MESH_DENSITY
}

fn default_line_count() -> u32 {
    DEFAULT_LINE_COUNT
}

fn default_line_density() -> u32 {
    DEFAULT_LINE_DENSITY
}

fn default_point_density() -> u32 {
    DEFAULT_POINT_DENSITY
}

fn default_opacity() -> f32 {
    DEFAULT_LAYER_OPACITY
}

fn default_width() -> f32 {
    DEFAULT_LAYER_WIDTH
}

fn default_enabled() -> bool {
    true
}

pub fn parse_look_preset(json: &str) -> Result<LookPreset, serde_json::Error> {
    serde_json::from_str(json)
}

impl LineLayerPreset {
    pub fn to_layer(&self, load_sprite: impl FnOnce(&str) -> Handle<Image>) -> LineLayer {
        let mut layer = LineLayer::default()
            .with_orientation(self.orientation)
            .with_line_count(self.line_count)
            .with_line_density(self.line_density)
            .with_opacity(self.opacity)
            .with_width(self.width);
        layer.set_sprite(self.sprite.as_deref().map(load_sprite));
        layer.set_enabled(self.enabled);
        layer
    }
}

impl PointLayerPreset {
    pub fn to_layer(&self, load_sprite: impl FnOnce(&str) -> Handle<Image>) -> PointLayer {
        let mut layer = PointLayer::default()
            .with_point_density(self.point_density)
            .with_opacity(self.opacity)
            .with_size(self.size);
        layer.set_sprite(self.sprite.as_deref().map(load_sprite));
        layer.set_enabled(self.enabled);
        layer
    }
}

/// Preset waiting to be expanded into layers on its look entity.
#[derive(Component, Debug, Clone)]
pub struct PendingLookPreset(pub Handle<LookPreset>);

/// Spawn the layers of every loaded preset and drop the pending marker.
pub fn apply_look_presets(
    mut commands: Commands,
    mut looks: Query<(Entity, &PendingLookPreset, &mut HologramLook)>,
    presets: Res<Assets<LookPreset>>,
    asset_server: Res<AssetServer>,
) {
    for (entity, pending, mut look) in &mut looks {
        let Some(preset) = presets.get(&pending.0) else {
            if matches!(
                asset_server.get_load_state(&pending.0),
                Some(LoadState::Failed(_))
            ) {
                warn!("Look preset failed to load, no layers added");
                commands.entity(entity).remove::<PendingLookPreset>();
            }
            continue;
        };

        // Layers already parented to the look are marked dirty downstream.
        look.set_mesh_density(preset.mesh_density);

        let mut look_commands = commands.entity(entity);
        for line in &preset.line_layers {
            look_commands.add_line_layer(line.to_layer(|path| asset_server.load(path.to_owned())));
        }
        for point in &preset.point_layers {
            look_commands
                .add_point_layer(point.to_layer(|path| asset_server.load(path.to_owned())));
        }
        look_commands.remove::<PendingLookPreset>();

        info!(
            "Applied look preset: {} line layers, {} point layers",
            preset.line_layers.len(),
            preset.point_layers.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::systems::geometry_dirty::propagate_geometry_dirty;

    fn preset_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Image>()
            .init_asset::<LookPreset>()
            .add_systems(Update, (apply_look_presets, propagate_geometry_dirty).chain());
        app
    }

    #[test]
    fn omitted_fields_take_defaults() {
        let preset = parse_look_preset(r#"{ "line_layers": [{}], "point_layers": [{}] }"#).unwrap();

        assert_eq!(preset.mesh_density, DEFAULT_MESH_DENSITY);
        let line = &preset.line_layers[0];
        assert_eq!(line.orientation, LineOrientation::Vertical);
        assert_eq!(line.line_count, 100);
        assert_eq!(line.line_density, 100);
        assert_eq!(line.opacity, 0.75);
        assert_eq!(line.width, 6.0);
        assert!(line.enabled);
        assert_eq!(preset.point_layers[0].point_density, 100);
    }

    #[test]
    fn out_of_range_values_are_clamped_on_conversion() {
        let preset = parse_look_preset(
            r#"{
                "line_layers": [{
                    "orientation": "Horizontal",
                    "line_count": 4000,
                    "line_density": 0,
                    "opacity": 3.0,
                    "width": 120.0
                }]
            }"#,
        )
        .unwrap();

        let layer = preset.line_layers[0].to_layer(|_| unreachable!());
        assert_eq!(layer.orientation(), LineOrientation::Horizontal);
        assert_eq!(layer.line_count(), 255);
        assert_eq!(layer.line_density().get(), 1);
        assert_eq!(layer.opacity(), 1.0);
        assert_eq!(layer.width(), 50.0);
        assert!(layer.sprite().is_none());
    }

    #[test]
    fn sprite_paths_are_resolved_through_the_loader() {
        let preset = parse_look_preset(
            r#"{ "point_layers": [{ "sprite": "sprites/dot.png", "enabled": false }] }"#,
        )
        .unwrap();

        let mut requested = None;
        let layer = preset.point_layers[0].to_layer(|path| {
            requested = Some(path.to_owned());
            Handle::default()
        });

        assert_eq!(requested.as_deref(), Some("sprites/dot.png"));
        assert!(layer.sprite().is_some());
        assert!(!layer.is_enabled());
    }

    #[test]
    fn bundled_default_preset_parses() {
        let preset =
            parse_look_preset(include_str!("../../../assets/looks/default.look.json")).unwrap();

        assert_eq!(preset.line_layers.len(), 2);
        assert_eq!(preset.line_layers[1].orientation, LineOrientation::Horizontal);
        assert_eq!(preset.point_layers.len(), 1);
    }

    #[test]
    fn loaded_preset_spawns_layers_once() {
        let mut app = preset_app();

        let preset = parse_look_preset(
            r#"{ "mesh_density": 300, "line_layers": [{}, {}], "point_layers": [{}] }"#,
        )
        .unwrap();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<LookPreset>>()
            .add(preset);
        let look = app
            .world_mut()
            .spawn((HologramLook::default(), PendingLookPreset(handle)))
            .id();

        app.update();
        app.update();

        let world = app.world_mut();
        assert!(world.entity(look).get::<PendingLookPreset>().is_none());

        let look_component = world.entity(look).get::<HologramLook>().unwrap();
        assert_eq!(look_component.mesh_density(), 255);
        assert!(!look_component.mesh_density_changed());

        let mut lines = world.query::<(&LineLayer, &ChildOf)>();
        assert_eq!(lines.iter(world).count(), 2);
        assert!(lines.iter(world).all(|(_, child_of)| child_of.parent() == look));

        let mut points = world.query::<&PointLayer>();
        assert_eq!(points.iter(world).count(), 1);
    }

    #[test]
    fn preset_mesh_density_dirties_existing_layers() {
        let mut app = preset_app();

        let preset = parse_look_preset(r#"{ "mesh_density": 64, "line_layers": [{}] }"#).unwrap();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<LookPreset>>()
            .add(preset);
        let look = app
            .world_mut()
            .spawn((HologramLook::default(), PendingLookPreset(handle)))
            .id();
        let existing = app
            .world_mut()
            .spawn((LineLayer::default(), ChildOf(look)))
            .id();

        app.update();

        let world = app.world_mut();
        let look_component = world.entity(look).get::<HologramLook>().unwrap();
        assert_eq!(look_component.mesh_density(), 64);
        assert!(!look_component.mesh_density_changed());
        assert!(
            world
                .entity(existing)
                .get::<LineLayer>()
                .unwrap()
                .is_geometry_dirty()
        );

        let mut lines = world.query::<&LineLayer>();
        assert_eq!(lines.iter(world).count(), 2);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_look_preset(r#"{ "line_layers": 3 }"#).is_err());
    }
}
