use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::OrbitRig;
use crate::plugins::{FlightSet, StartupSet};
use crate::systems::{camera_follow_system, orbit_input_system, sync_camera_transform};

const CAMERA_START: [f64; 3] = [0.0, 50.0, 100.0];
const CAMERA_FOV_DEGREES: f32 = 75.0;
const CAMERA_NEAR: f32 = 1.0;
const CAMERA_FAR: f32 = 300.0;
const FOG_START: f32 = 150.0;
const FOG_END: f32 = 300.0;

pub struct CameraPlugin;

fn spawn_camera(mut commands: Commands) {
    let start = Vector3::from(CAMERA_START);
    let rig = OrbitRig::new(Vector3::zeros(), start);
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        DistanceFog {
            color: Color::srgb_u8(0x87, 0xce, 0xeb),
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        Transform::from_xyz(start.x as f32, start.y as f32, start.z as f32)
            .looking_at(Vec3::ZERO, Vec3::Y),
        rig,
    ));
}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera.in_set(StartupSet::BuildCamera))
            .add_systems(
                Update,
                (
                    orbit_input_system.in_set(FlightSet::Input),
                    camera_follow_system.in_set(FlightSet::CameraFollow),
                    sync_camera_transform.in_set(FlightSet::RenderSync),
                ),
            );
    }
}
