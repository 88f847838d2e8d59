use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::components::OrbitRig;

/// Radians of orbit per pixel of mouse travel.
const ROTATE_SENSITIVITY: f64 = 0.005;

/// Applies left-button mouse drag to the orbit rig.
///
/// Dragging rotates the camera offset about the target; the rig's
/// `user_rotating` flag mirrors the button state so other systems can
/// tell a manual orbit is in progress. Motion events are drained even
/// when not rotating so stale deltas never apply on the next press.
pub fn orbit_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion_events: EventReader<MouseMotion>,
    mut rig_query: Query<&mut OrbitRig>,
) {
    let Ok(mut rig) = rig_query.get_single_mut() else {
        motion_events.clear();
        return;
    };

    rig.user_rotating = buttons.pressed(MouseButton::Left);
    if !rig.user_rotating {
        motion_events.clear();
        return;
    }

    let mut delta = Vec2::ZERO;
    for event in motion_events.read() {
        delta += event.delta;
    }
    if delta == Vec2::ZERO {
        return;
    }

    rig.rotate_offset(
        -f64::from(delta.x) * ROTATE_SENSITIVITY,
        -f64::from(delta.y) * ROTATE_SENSITIVITY,
    );
}
