pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;

pub use components::{AircraftPose, FlightControls, OrbitRig, PlayerController};
pub use plugins::{
    AircraftPlugin, CameraPlugin, EnvironmentPlugin, FlightPhase, OverlayPlugin,
    StartupSequencePlugin,
};
pub use resources::FlightConfig;
