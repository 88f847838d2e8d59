use cityflyer::components::OrbitRig;
use cityflyer::resources::FlightConfig;
use nalgebra::Vector3;

use crate::common::{assert_vector_eq, hold_pitch_down, hold_turn_left, TestAppBuilder};

fn default_rig() -> OrbitRig {
    OrbitRig::new(Vector3::zeros(), Vector3::new(0.0, 50.0, 100.0))
}

#[test]
fn test_target_tracks_aircraft() {
    let config = FlightConfig::default();
    let mut app = TestAppBuilder::new().with_camera_rig(default_rig()).build();

    app.run_frames(5);

    let pose = app.pose();
    let rig = app.rig();
    let expected = pose.position + Vector3::new(0.0, config.camera_height_offset, 0.0);
    assert_vector_eq(&rig.target, &expected, 1e-9);
}

#[test]
fn test_rigid_translation_preserves_offset() {
    let mut app = TestAppBuilder::new().with_camera_rig(default_rig()).build();

    // Settle the rig onto the aircraft, then record the offset.
    app.run_frames(1);
    let offset_before = app.rig().offset();

    app.set_controls(hold_turn_left());
    app.run_frames(40);
    app.set_controls(hold_pitch_down());
    app.run_frames(40);

    let offset_after = app.rig().offset();
    assert_vector_eq(&offset_after, &offset_before, 1e-9);
}

#[test]
fn test_camera_moves_by_the_aircraft_delta() {
    let mut app = TestAppBuilder::new().with_camera_rig(default_rig()).build();
    app.run_frames(1);

    let pose_before = app.pose();
    let rig_before = app.rig();
    app.run_frames(20);

    let aircraft_delta = app.pose().position - pose_before.position;
    let camera_delta = app.rig().position - rig_before.position;
    assert_vector_eq(&camera_delta, &aircraft_delta, 1e-9);
}
