use bevy::prelude::*;

use crate::components::{FlightControls, PlayerController};

/// Samples the keyboard into the player's `FlightControls` once per
/// frame. Arrow keys steer, W/S (or up/down arrows) pitch. Anything else
/// is ignored.
pub fn keyboard_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut FlightControls, &PlayerController)>,
) {
    let Ok((mut controls, controller)) = query.get_single_mut() else {
        return;
    };
    if !controller.active {
        return;
    }

    controls.turn_left = keyboard.pressed(KeyCode::ArrowLeft);
    controls.turn_right = keyboard.pressed(KeyCode::ArrowRight);
    controls.pitch_up =
        keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp);
    controls.pitch_down =
        keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);
}
