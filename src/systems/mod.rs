pub mod camera;
mod flight;
mod input;
mod render;

pub use camera::{camera_follow_system, orbit_input_system};
pub use flight::{flight_dynamics_system, handle_reset_events, step_flight, StepOutcome};
pub use input::keyboard_input_system;
pub use render::{spin_propeller_system, sync_aircraft_transform, sync_camera_transform};
