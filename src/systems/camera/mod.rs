mod follow;
mod orbit;

pub use follow::camera_follow_system;
pub use orbit::orbit_input_system;
