use std::fs;
use std::path::Path;

use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;

/// Tunable constants for the flight loop and camera rig.
///
/// Defaults match the demo's baked-in values; a YAML file can override any
/// subset of fields. All rates are per rendered frame, not per second —
/// the simulation deliberately steps once per frame.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Distance travelled along the forward vector each frame.
    pub speed: f64,
    /// Yaw change per frame while a turn control is held (rad).
    pub turn_rate: f64,
    /// Pitch change per frame while a pitch control is held (rad).
    pub pitch_rate: f64,
    /// Pitch is clamped to [-pitch_limit, pitch_limit] (rad).
    pub pitch_limit: f64,
    /// Half-extent of the playable area on the X and Z axes.
    pub bounds: f64,
    /// Yaw nudge per frame applied outside the bounds (rad). A soft
    /// fence: sustained outward steering can still win against it.
    pub boundary_turn_rate: f64,
    /// Altitude above which the pose is teleported back to the start.
    pub ceiling: f64,
    /// Altitude below which the aircraft counts as crashed.
    pub crash_altitude: f64,
    /// Spawn and reset position.
    pub start_position: Vector3<f64>,
    /// Spawn and reset heading (rad).
    pub start_yaw: f64,
    /// Vertical offset of the camera's orbit target above the aircraft.
    pub camera_height_offset: f64,
    /// Propeller rotation per frame (rad).
    pub propeller_spin_rate: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            speed: 0.5,
            turn_rate: 0.02,
            pitch_rate: 0.01,
            pitch_limit: 0.5,
            bounds: 120.0,
            boundary_turn_rate: 0.03,
            ceiling: 120.0,
            crash_altitude: 2.0,
            start_position: Vector3::new(0.0, 20.0, 0.0),
            start_yaw: std::f64::consts::PI,
            camera_height_offset: 1.5,
            propeller_spin_rate: 0.3,
        }
    }
}

impl FlightConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults. A
    /// present-but-broken file also falls back, after reporting why.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::from_yaml(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!(
                    "Ignoring flight config {}: {err}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.speed <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        if self.pitch_limit < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "pitch_limit must be non-negative, got {}",
                self.pitch_limit
            )));
        }
        if self.bounds <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "bounds must be positive, got {}",
                self.bounds
            )));
        }
        Ok(())
    }
}
