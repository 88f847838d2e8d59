use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::FlightConfig;

/// Simulation-side pose of the aircraft.
///
/// Position and rotation live here as plain f64 values; the render-side
/// `Transform` is written from this once per frame by the sync system, so
/// the flight update never touches scene-graph state directly. Roll is
/// unused and the attitude is just pitch + yaw.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftPose {
    /// Position in world space, Y up.
    pub position: Vector3<f64>,
    /// Nose pitch in radians, positive pushes the nose down at the start
    /// heading. Clamped elsewhere to the configured limit.
    pub pitch: f64,
    /// Heading in radians about the world Y axis. Unclamped.
    pub yaw: f64,
    /// Distance travelled along the forward vector each frame.
    pub speed: f64,
}

impl Default for AircraftPose {
    fn default() -> Self {
        Self::starting(&FlightConfig::default())
    }
}

impl AircraftPose {
    /// The pose the aircraft spawns with and is returned to on reset.
    pub fn starting(config: &FlightConfig) -> Self {
        Self {
            position: config.start_position,
            pitch: 0.0,
            yaw: config.start_yaw,
            speed: config.speed,
        }
    }

    /// Unit forward vector for the current attitude.
    ///
    /// The attitude is applied as Rx(pitch) then Ry(yaw) to the rest
    /// forward vector (0, 0, -1) in a Y-up right-handed frame, giving
    /// (-sin yaw, sin pitch * cos yaw, -cos pitch * cos yaw).
    pub fn forward(&self) -> Vector3<f64> {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vector3::new(-sin_yaw, sin_pitch * cos_yaw, -cos_pitch * cos_yaw).normalize()
    }
}
