use bevy::prelude::*;

/// Decorative propeller sub-mesh, spun at a constant rate per frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct Propeller {
    pub spin_rate: f32,
}

impl Propeller {
    pub fn new(spin_rate: f32) -> Self {
        Self { spin_rate }
    }
}
