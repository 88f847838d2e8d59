use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupSet {
    BuildAircraft,
    BuildCamera,
    BuildEnvironment,
    BuildUi,
}

/// Per-frame order of the flight loop. Input is sampled first, then the
/// pose advances, then the camera rig follows, then simulation values are
/// copied into render transforms.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Dynamics,
    CameraFollow,
    RenderSync,
}

/// Game phase. `Crashed` latches until the player asks to fly again;
/// while it holds, input and flight updates are paused and the overlay
/// is shown.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlightPhase {
    #[default]
    Flying,
    Crashed,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<FlightPhase>()
            .configure_sets(
                Startup,
                (
                    StartupSet::BuildAircraft,
                    StartupSet::BuildCamera,
                    StartupSet::BuildEnvironment,
                    StartupSet::BuildUi,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                (
                    FlightSet::Input,
                    FlightSet::Dynamics,
                    FlightSet::CameraFollow,
                    FlightSet::RenderSync,
                )
                    .chain(),
            );
    }
}
