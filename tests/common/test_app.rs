use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use cityflyer::components::{AircraftPose, FlightControls, OrbitRig, PlayerController};
use cityflyer::plugins::{
    CrashEvent, FlightPhase, FlightSet, ResetRequestEvent, StartupSequencePlugin,
};
use cityflyer::resources::FlightConfig;
use cityflyer::systems::{
    camera_follow_system, flight_dynamics_system, handle_reset_events, sync_aircraft_transform,
};

/// Builder for a headless app running the flight loop without any
/// rendering, asset or window plugins.
pub struct TestAppBuilder {
    config: FlightConfig,
    start_pose: Option<AircraftPose>,
    camera_rig: Option<OrbitRig>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: FlightConfig::default(),
            start_pose: None,
            camera_rig: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FlightConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_start_pose(mut self, pose: AircraftPose) -> Self {
        self.start_pose = Some(pose);
        self
    }

    pub fn with_camera_rig(mut self, rig: OrbitRig) -> Self {
        self.camera_rig = Some(rig);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(StatesPlugin)
            .add_plugins(StartupSequencePlugin)
            .insert_resource(self.config.clone())
            .add_event::<CrashEvent>()
            .add_event::<ResetRequestEvent>()
            .add_systems(
                Update,
                (
                    flight_dynamics_system
                        .in_set(FlightSet::Dynamics)
                        .run_if(in_state(FlightPhase::Flying)),
                    handle_reset_events.in_set(FlightSet::Dynamics),
                    camera_follow_system.in_set(FlightSet::CameraFollow),
                    sync_aircraft_transform.in_set(FlightSet::RenderSync),
                ),
            );

        let pose = self
            .start_pose
            .unwrap_or_else(|| AircraftPose::starting(&self.config));
        let aircraft = app
            .world_mut()
            .spawn((
                pose,
                FlightControls::default(),
                PlayerController::new(),
                Transform::default(),
                Name::new("test aircraft"),
            ))
            .id();
        let camera = self
            .camera_rig
            .map(|rig| app.world_mut().spawn(rig).id());

        TestApp {
            app,
            aircraft,
            camera,
        }
    }
}

pub struct TestApp {
    pub app: App,
    aircraft: Entity,
    camera: Option<Entity>,
}

impl TestApp {
    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    pub fn pose(&self) -> AircraftPose {
        *self
            .app
            .world()
            .get::<AircraftPose>(self.aircraft)
            .expect("aircraft pose missing")
    }

    pub fn set_pose(&mut self, pose: AircraftPose) {
        *self
            .app
            .world_mut()
            .get_mut::<AircraftPose>(self.aircraft)
            .expect("aircraft pose missing") = pose;
    }

    pub fn controls(&self) -> FlightControls {
        *self
            .app
            .world()
            .get::<FlightControls>(self.aircraft)
            .expect("flight controls missing")
    }

    pub fn set_controls(&mut self, controls: FlightControls) {
        *self
            .app
            .world_mut()
            .get_mut::<FlightControls>(self.aircraft)
            .expect("flight controls missing") = controls;
    }

    pub fn rig(&self) -> OrbitRig {
        let camera = self.camera.expect("app built without a camera rig");
        *self
            .app
            .world()
            .get::<OrbitRig>(camera)
            .expect("orbit rig missing")
    }

    pub fn phase(&self) -> FlightPhase {
        *self.app.world().resource::<State<FlightPhase>>().get()
    }

    pub fn request_reset(&mut self) {
        self.app.world_mut().send_event(ResetRequestEvent);
    }
}
