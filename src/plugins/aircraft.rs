use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::components::{AircraftPose, FlightControls, PlayerController, Propeller};
use crate::plugins::{CrashEvent, FlightPhase, FlightSet, ResetRequestEvent, StartupSet};
use crate::resources::FlightConfig;
use crate::systems::{
    flight_dynamics_system, handle_reset_events, keyboard_input_system,
    spin_propeller_system, sync_aircraft_transform,
};

const AIRCRAFT_SCENE: &str = "models/cessna.glb#Scene0";
/// Yaws the GLTF model so its nose points at -Z, the rest forward
/// direction the flight step assumes.
const MODEL_YAW: f32 = -FRAC_PI_2;
const MODEL_SCALE: f32 = 0.5;

pub struct AircraftPlugin {
    config: FlightConfig,
}

impl AircraftPlugin {
    pub fn new(config: FlightConfig) -> Self {
        Self { config }
    }

    fn spawn_aircraft(
        mut commands: Commands,
        asset_server: Res<AssetServer>,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        config: Res<FlightConfig>,
    ) {
        let pose = AircraftPose::starting(&config);
        commands
            .spawn((
                pose,
                FlightControls::default(),
                PlayerController::new(),
                Name::new("aircraft"),
                Transform::from_xyz(
                    pose.position.x as f32,
                    pose.position.y as f32,
                    pose.position.z as f32,
                ),
                Visibility::default(),
            ))
            .with_children(|aircraft| {
                aircraft
                    .spawn((
                        Transform::from_scale(Vec3::splat(MODEL_SCALE)),
                        Visibility::default(),
                    ))
                    .with_children(|group| {
                        group.spawn((
                            SceneRoot(asset_server.load(AIRCRAFT_SCENE)),
                            Transform::from_rotation(Quat::from_rotation_y(MODEL_YAW)),
                        ));
                        group.spawn((
                            Propeller::new(config.propeller_spin_rate as f32),
                            Mesh3d(meshes.add(Cylinder::new(0.05, 0.1))),
                            MeshMaterial3d(materials.add(StandardMaterial {
                                base_color: Color::srgb(0.5, 0.5, 0.5),
                                ..default()
                            })),
                            Transform::from_xyz(0.0, 0.2, 2.3)
                                .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                        ));
                    });
            });
    }
}

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .add_event::<CrashEvent>()
            .add_event::<ResetRequestEvent>()
            .add_systems(
                Startup,
                Self::spawn_aircraft.in_set(StartupSet::BuildAircraft),
            )
            .add_systems(
                Update,
                (
                    keyboard_input_system
                        .in_set(FlightSet::Input)
                        .run_if(in_state(FlightPhase::Flying)),
                    flight_dynamics_system
                        .in_set(FlightSet::Dynamics)
                        .run_if(in_state(FlightPhase::Flying)),
                    handle_reset_events.in_set(FlightSet::Dynamics),
                    (sync_aircraft_transform, spin_propeller_system)
                        .in_set(FlightSet::RenderSync),
                ),
            );
    }
}
