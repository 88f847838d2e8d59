use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AircraftPose, OrbitRig, PlayerController};
use crate::resources::FlightConfig;

/// Translates the orbit rig rigidly with the aircraft.
///
/// The offset between camera and target carries the user's orbit choice,
/// so it is read off the previous frame's rig and reapplied around the
/// new target. No damping: the camera moves exactly as the aircraft
/// does.
pub fn camera_follow_system(
    mut rig_query: Query<&mut OrbitRig>,
    target_query: Query<&AircraftPose, With<PlayerController>>,
    config: Res<FlightConfig>,
) {
    let (Ok(mut rig), Ok(pose)) = (rig_query.get_single_mut(), target_query.get_single())
    else {
        return;
    };

    let desired_target =
        pose.position + Vector3::new(0.0, config.camera_height_offset, 0.0);
    let offset = rig.offset();
    rig.target = desired_target;
    rig.position = desired_target + offset;
}
