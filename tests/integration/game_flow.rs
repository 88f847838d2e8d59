use approx::assert_relative_eq;
use cityflyer::components::AircraftPose;
use cityflyer::plugins::FlightPhase;
use cityflyer::resources::FlightConfig;
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use crate::common::{hold_pitch_down, pose_at, TestApp, TestAppBuilder};

/// An app one frame away from dropping below the crash altitude.
fn app_about_to_crash() -> TestApp {
    let mut pose = pose_at(Vector3::new(0.0, 2.2, 0.0));
    pose.pitch = 0.5;
    TestAppBuilder::new().with_start_pose(pose).build()
}

#[test]
fn test_low_altitude_raises_crash() {
    let mut app = app_about_to_crash();
    assert_eq!(app.phase(), FlightPhase::Flying);

    // One frame to drop below the floor, one for the phase transition to
    // apply.
    app.run_frames(2);

    assert_eq!(app.phase(), FlightPhase::Crashed);
    assert!(app.pose().position.y < 2.0);
}

#[test]
fn test_crash_freezes_the_aircraft() {
    let mut app = app_about_to_crash();
    app.run_frames(2);
    assert_eq!(app.phase(), FlightPhase::Crashed);

    let frozen = app.pose();
    app.set_controls(hold_pitch_down());
    app.run_frames(30);

    assert_eq!(app.phase(), FlightPhase::Crashed);
    assert_eq!(app.pose(), frozen);
}

#[test]
fn test_crash_latches_until_reset() {
    let mut app = app_about_to_crash();
    app.run_frames(2);

    app.run_frames(60);
    assert_eq!(app.phase(), FlightPhase::Crashed);

    app.request_reset();
    app.run_frames(2);
    assert_eq!(app.phase(), FlightPhase::Flying);
}

#[test]
fn test_reset_restores_start_pose_and_controls() {
    let config = FlightConfig::default();
    let mut app = app_about_to_crash();
    app.set_controls(hold_pitch_down());
    app.run_frames(2);
    assert_eq!(app.phase(), FlightPhase::Crashed);

    // One frame: the reset handler restores the pose; the phase flips
    // back to Flying on the next transition, so the pose is still
    // untouched by the flight step here.
    app.request_reset();
    app.run_frames(1);

    assert_eq!(app.pose(), AircraftPose::starting(&config));
    assert!(!app.controls().pitch_down);
    assert_relative_eq!(app.pose().speed, config.speed);
}

#[test]
fn test_flight_resumes_after_reset() {
    let mut app = app_about_to_crash();
    app.run_frames(2);
    app.request_reset();
    app.run_frames(2);

    let resumed = app.pose();
    app.run_frames(10);

    // Moving again along the start heading.
    assert!(app.pose().position.z > resumed.position.z);
    assert_eq!(app.phase(), FlightPhase::Flying);
}
