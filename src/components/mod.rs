mod aircraft;
mod camera;
mod controller;
mod controls;
mod propeller;

pub use aircraft::AircraftPose;
pub use camera::OrbitRig;
pub use controller::PlayerController;
pub use controls::FlightControls;
pub use propeller::Propeller;
