mod aircraft;
mod camera;
mod environment;
mod events;
mod staging;
mod ui;

pub use aircraft::AircraftPlugin;
pub use camera::CameraPlugin;
pub use environment::EnvironmentPlugin;
pub use events::{CrashEvent, ResetRequestEvent};
pub use staging::{FlightPhase, FlightSet, StartupSequencePlugin, StartupSet};
pub use ui::OverlayPlugin;
