use bevy::prelude::*;
use nalgebra::Vector3;

/// Raised once when the aircraft drops below the crash altitude.
#[derive(Event, Debug)]
pub struct CrashEvent {
    pub position: Vector3<f64>,
}

/// Asks for the aircraft to be returned to its start pose and the game to
/// resume. Emitted by the crash overlay's "Play Again" button.
#[derive(Event, Debug, Default)]
pub struct ResetRequestEvent;
