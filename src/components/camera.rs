use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Elevation clamp keeps the orbit away from the poles where the look-at
/// up vector degenerates.
const MIN_ELEVATION: f64 = -std::f64::consts::FRAC_PI_2 + 0.05;
const MAX_ELEVATION: f64 = std::f64::consts::FRAC_PI_2 - 0.05;

/// Third-person orbit rig: a target point and a camera position related by
/// a user-adjustable offset.
///
/// The follow system translates target and position rigidly with the
/// aircraft; the orbit system rotates the offset about the target from
/// mouse drag. Only the offset between the two ever encodes the user's
/// choice of viewing angle and distance.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitRig {
    /// Point the camera looks at.
    pub target: Vector3<f64>,
    /// Camera position in world space.
    pub position: Vector3<f64>,
    /// True while the user is dragging the orbit with the mouse.
    pub user_rotating: bool,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(Vector3::zeros(), Vector3::new(0.0, 50.0, 100.0))
    }
}

impl OrbitRig {
    pub fn new(target: Vector3<f64>, position: Vector3<f64>) -> Self {
        Self {
            target,
            position,
            user_rotating: false,
        }
    }

    /// Camera position relative to the target.
    pub fn offset(&self) -> Vector3<f64> {
        self.position - self.target
    }

    /// Rotates the offset about the target: azimuth about the world Y
    /// axis, elevation clamped short of the poles. Distance is preserved.
    pub fn rotate_offset(&mut self, azimuth_delta: f64, elevation_delta: f64) {
        let offset = self.offset();
        let radius = offset.norm();
        if radius < f64::EPSILON {
            return;
        }

        let azimuth = offset.x.atan2(offset.z) + azimuth_delta;
        let elevation = (offset.y / radius)
            .asin()
            .clamp(MIN_ELEVATION, MAX_ELEVATION)
            + elevation_delta;
        let elevation = elevation.clamp(MIN_ELEVATION, MAX_ELEVATION);

        let (sin_elevation, cos_elevation) = elevation.sin_cos();
        let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
        self.position = self.target
            + Vector3::new(
                radius * cos_elevation * sin_azimuth,
                radius * sin_elevation,
                radius * cos_elevation * cos_azimuth,
            );
    }
}
