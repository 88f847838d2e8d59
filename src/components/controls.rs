use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Held status of the four logical flight controls.
///
/// Levels, not edges: the input system rewrites every field each frame
/// from the current key state, so there is no queue and no repeat
/// handling to think about.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightControls {
    pub turn_left: bool,
    pub turn_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}
