use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::plugins::StartupSet;

const CITY_SCENE: &str = "models/city.glb#Scene0";
const CITY_SCALE: f32 = 4.0;
const CITY_OFFSET: Vec3 = Vec3::new(0.0, -1.0, 0.0);

const SUN_ILLUMINANCE: f32 = 10_000.0;
const AMBIENT_BRIGHTNESS: f32 = 300.0;

const STAR_COUNT: usize = 5000;
const STARFIELD_RADIUS: f32 = 300.0;
const STARFIELD_DEPTH: f32 = 60.0;
/// Fixed seed so the same sky comes back every launch.
const STARFIELD_SEED: u64 = 0x5747;

/// Static scene description: sky color, fog-matched clear color, lights,
/// a starfield shell and the city model. No per-frame logic lives here.
pub struct EnvironmentPlugin;

fn sky_color() -> Color {
    Color::srgb_u8(0x87, 0xce, 0xeb)
}

fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 50.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_city(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        SceneRoot(asset_server.load(CITY_SCENE)),
        Transform::from_translation(CITY_OFFSET).with_scale(Vec3::splat(CITY_SCALE)),
    ));
}

fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(STARFIELD_SEED);
    let mut positions = Vec::with_capacity(STAR_COUNT);
    while positions.len() < STAR_COUNT {
        let candidate = Vec3::new(
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
        );
        let length = candidate.length();
        if length < 1e-3 || length > 1.0 {
            continue;
        }
        let radius = STARFIELD_RADIUS + rng.gen::<f32>() * STARFIELD_DEPTH;
        let star = candidate / length * radius;
        positions.push([star.x, star.y, star.z]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    commands.spawn((
        Name::new("starfield"),
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
    ));
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(sky_color()))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: AMBIENT_BRIGHTNESS,
            })
            .add_systems(
                Startup,
                (spawn_lights, spawn_starfield, spawn_city)
                    .in_set(StartupSet::BuildEnvironment),
            );
    }
}
