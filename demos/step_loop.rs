//! Headless flight loop: steps the simulation without a window and
//! prints the pose while the aircraft noses down from the start pose.
//!
//! Run with `cargo run --example step_loop`.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use cityflyer::components::{AircraftPose, FlightControls, PlayerController};
use cityflyer::plugins::{
    CrashEvent, FlightPhase, FlightSet, ResetRequestEvent, StartupSequencePlugin,
};
use cityflyer::resources::FlightConfig;
use cityflyer::systems::{flight_dynamics_system, handle_reset_events};

fn main() {
    let config = FlightConfig::default();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(StatesPlugin)
        .add_plugins(StartupSequencePlugin)
        .insert_resource(config.clone())
        .add_event::<CrashEvent>()
        .add_event::<ResetRequestEvent>()
        .add_systems(
            Update,
            (
                flight_dynamics_system
                    .in_set(FlightSet::Dynamics)
                    .run_if(in_state(FlightPhase::Flying)),
                handle_reset_events.in_set(FlightSet::Dynamics),
            ),
        );

    let aircraft = app
        .world_mut()
        .spawn((
            AircraftPose::starting(&config),
            FlightControls {
                pitch_down: true,
                ..Default::default()
            },
            PlayerController::new(),
        ))
        .id();

    for frame in 0..=240u32 {
        if frame > 0 {
            app.update();
        }
        if frame % 30 == 0 {
            let pose = app
                .world()
                .get::<AircraftPose>(aircraft)
                .expect("aircraft missing");
            println!(
                "frame {frame:3}: position = ({:7.2}, {:6.2}, {:7.2})  pitch = {:+.3}  yaw = {:.3}",
                pose.position.x, pose.position.y, pose.position.z, pose.pitch, pose.yaw
            );
        }
    }
}
