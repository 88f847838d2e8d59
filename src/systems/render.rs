use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AircraftPose, OrbitRig, Propeller};

fn render_translation(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Copies the simulation pose into the aircraft's render transform.
/// Attitude is pitch about X then yaw about Y, matching the forward
/// vector used by the flight step.
pub fn sync_aircraft_transform(mut query: Query<(&AircraftPose, &mut Transform)>) {
    for (pose, mut transform) in query.iter_mut() {
        transform.translation = render_translation(&pose.position);
        transform.rotation =
            Quat::from_euler(EulerRot::XYZ, pose.pitch as f32, pose.yaw as f32, 0.0);
    }
}

/// Copies the orbit rig into the camera transform.
pub fn sync_camera_transform(mut query: Query<(&OrbitRig, &mut Transform)>) {
    for (rig, mut transform) in query.iter_mut() {
        transform.translation = render_translation(&rig.position);
        let target = render_translation(&rig.target);
        transform.look_at(target, Vec3::Y);
    }
}

pub fn spin_propeller_system(mut query: Query<(&Propeller, &mut Transform)>) {
    for (propeller, mut transform) in query.iter_mut() {
        transform.rotate_local_z(propeller.spin_rate);
    }
}
