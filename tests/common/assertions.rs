use approx::assert_relative_eq;
use cityflyer::components::AircraftPose;
use cityflyer::resources::FlightConfig;
use nalgebra::Vector3;

/// Assert that a pose holds the simulation invariants: finite values,
/// pitch inside the configured limit, positive speed.
#[track_caller]
pub fn assert_pose_valid(pose: &AircraftPose, config: &FlightConfig) {
    assert!(pose.position.x.is_finite(), "Position x is not finite");
    assert!(pose.position.y.is_finite(), "Position y is not finite");
    assert!(pose.position.z.is_finite(), "Position z is not finite");
    assert!(pose.pitch.is_finite(), "Pitch is not finite");
    assert!(pose.yaw.is_finite(), "Yaw is not finite");

    assert!(
        pose.pitch.abs() <= config.pitch_limit + 1e-12,
        "Pitch {} outside [-{1}, {1}]",
        pose.pitch,
        config.pitch_limit
    );
    assert!(pose.speed > 0.0, "Speed must be positive");
}

/// Assert that two vectors are approximately equal componentwise.
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon, max_relative = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon, max_relative = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon, max_relative = epsilon);
}
