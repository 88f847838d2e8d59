use bevy::prelude::*;

use crate::components::{AircraftPose, FlightControls, PlayerController};
use crate::plugins::{CrashEvent, FlightPhase, ResetRequestEvent};
use crate::resources::FlightConfig;

/// What a single flight step did beyond moving the aircraft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The aircraft ended the step below the crash altitude.
    pub crashed: bool,
    /// The ceiling was exceeded and the pose was teleported back to the
    /// start.
    pub ceiling_reset: bool,
    /// The soft boundary nudged the heading back toward the play area.
    pub boundary_corrected: bool,
}

/// Advances the aircraft by one frame.
///
/// Order matters: rotation deltas first, then the move along the updated
/// forward vector, then the boundary nudge, the ceiling teleport and the
/// crash check against the post-move position. Everything here is a
/// silent state mutation; the outcome flags are the only signal out.
pub fn step_flight(
    pose: &mut AircraftPose,
    controls: &FlightControls,
    config: &FlightConfig,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    if controls.turn_left {
        pose.yaw += config.turn_rate;
    }
    if controls.turn_right {
        pose.yaw -= config.turn_rate;
    }
    if controls.pitch_up {
        pose.pitch = (pose.pitch - config.pitch_rate).max(-config.pitch_limit);
    }
    if controls.pitch_down {
        pose.pitch = (pose.pitch + config.pitch_rate).min(config.pitch_limit);
    }

    let direction = pose.forward();
    pose.position += direction * pose.speed;

    // Soft fence, not a wall: the nudge can lose to sustained outward
    // steering.
    if pose.position.x.abs() > config.bounds || pose.position.z.abs() > config.bounds {
        pose.yaw -= config.boundary_turn_rate;
        outcome.boundary_corrected = true;
    }

    if pose.position.y > config.ceiling {
        *pose = AircraftPose::starting(config);
        outcome.ceiling_reset = true;
    }

    if pose.position.y < config.crash_altitude {
        outcome.crashed = true;
    }

    outcome
}

/// Per-frame flight update for the player aircraft. Skipped entirely
/// while the game is in the `Crashed` phase, so a crash freezes the pose
/// until the player resets.
pub fn flight_dynamics_system(
    mut query: Query<(&mut AircraftPose, &FlightControls), With<PlayerController>>,
    config: Res<FlightConfig>,
    mut next_phase: ResMut<NextState<FlightPhase>>,
    mut crash_events: EventWriter<CrashEvent>,
) {
    let Ok((mut pose, controls)) = query.get_single_mut() else {
        return;
    };

    let outcome = step_flight(&mut pose, controls, &config);
    if outcome.ceiling_reset {
        info!("Ceiling exceeded, aircraft returned to start");
    }
    if outcome.crashed {
        info!("Aircraft down at {:?}", pose.position);
        crash_events.send(CrashEvent {
            position: pose.position,
        });
        next_phase.set(FlightPhase::Crashed);
    }
}

/// Handles "Play Again": restores the start pose, releases all controls
/// and resumes flying. Runs in every phase.
pub fn handle_reset_events(
    mut reset_events: EventReader<ResetRequestEvent>,
    mut query: Query<(&mut AircraftPose, &mut FlightControls), With<PlayerController>>,
    config: Res<FlightConfig>,
    mut next_phase: ResMut<NextState<FlightPhase>>,
) {
    for _ in reset_events.read() {
        for (mut pose, mut controls) in query.iter_mut() {
            *pose = AircraftPose::starting(&config);
            *controls = FlightControls::default();
        }
        next_phase.set(FlightPhase::Flying);
        info!("Flight reset to start pose");
    }
}
