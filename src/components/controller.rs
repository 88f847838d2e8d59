use bevy::prelude::*;

/// Marks the aircraft entity that keyboard input steers.
#[derive(Component, Debug)]
pub struct PlayerController {
    pub active: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    pub fn disabled() -> Self {
        Self { active: false }
    }
}
