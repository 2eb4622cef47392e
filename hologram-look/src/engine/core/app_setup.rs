use bevy::asset::{AssetMetaCheck, RenderAssetUsages};
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::window_config::create_window_config;
use crate::HologramLookPlugin;
use crate::engine::hologram::look::HologramLook;
use crate::engine::hologram::preset::PendingLookPreset;
use crate::engine::systems::look_controls::look_controls;

const DEFAULT_LOOK_PRESET_PATH: &str = "looks/default.look.json";

/// Resolution of the generated demo capture (colour on top, depth below).
const DEMO_CAPTURE_WIDTH: u32 = 512;
const DEMO_CAPTURE_HEIGHT: u32 = 1024;

#[derive(Component)]
struct FpsText;

/// Create the viewer app with the hologram look plugin and demo scene.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(HologramLookPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (look_controls, fps_text_update_system));

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn setup(mut commands: Commands, asset_server: Res<AssetServer>, mut images: ResMut<Assets<Image>>) {
    info!("Loading look preset from: {}", DEFAULT_LOOK_PRESET_PATH);

    let capture = images.add(create_demo_capture(DEMO_CAPTURE_WIDTH, DEMO_CAPTURE_HEIGHT));
    let bounds = Aabb::from_min_max(Vec3::new(-0.5, 0.0, -0.25), Vec3::new(0.5, 1.8, 0.25));

    commands.spawn((
        HologramLook::new(capture, bounds),
        PendingLookPreset(asset_server.load(DEFAULT_LOOK_PRESET_PATH)),
        Transform::from_xyz(-0.5, 0.0, 0.0).with_scale(Vec3::new(1.0, 1.8, 1.0)),
        Name::new("Hologram Look"),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.0, 3.0).looking_at(Vec3::new(0.0, 0.9, 0.0), Vec3::Y),
    ));

    spawn_ui(&mut commands);
}

/// Stacked colour/depth frame: a gradient on the top half, a radial depth
/// falloff on the bottom half.
fn create_demo_capture(width: u32, height: u32) -> Image {
    let height = height.max(2);
    let half = height / 2;
    let mut data = Vec::with_capacity((width * height * 4) as usize);

    for y in 0..height {
        for x in 0..width {
            let u = x as f32 / width as f32;
            let v = (y % half) as f32 / half as f32;
            let pixel = if y < half {
                [(u * 255.0) as u8, (v * 255.0) as u8, 200, 255]
            } else {
                let distance = Vec2::new(u - 0.5, v - 0.5).length() * 2.0;
                let depth = ((1.0 - distance).clamp(0.0, 1.0) * 255.0) as u8;
                [depth, depth, depth, 255]
            };
            data.extend_from_slice(&pixel);
        }
    }

    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8Unorm,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
}

fn spawn_ui(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.4, 0.9, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(value) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|fps| fps.smoothed())
        {
            text.0 = format!("FPS: {value:.1}");
        }
    }
}
