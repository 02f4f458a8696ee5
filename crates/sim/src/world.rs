//! Simulation world container
//!
//! One controlled rig plus the parameters shared with the physics engine.
//! Gravity is the single environment parameter adjusted during training;
//! it is written through [`World::set_gravity`] and read by whatever
//! integrator advances the world.

use crate::humanoid::Humanoid;
use crate::types::{SimParams, Vec3};

#[derive(Debug)]
pub struct World {
    pub humanoid: Humanoid,
    pub params: SimParams,
}

impl World {
    #[must_use]
    pub fn new(humanoid: Humanoid) -> Self {
        Self {
            humanoid,
            params: SimParams::default(),
        }
    }

    /// Downward gravity magnitude currently in effect.
    #[must_use]
    pub fn gravity_magnitude(&self) -> f32 {
        -self.params.gravity.y
    }

    /// Point gravity straight down with the given magnitude.
    pub fn set_gravity(&mut self, magnitude: f32) {
        self.params.gravity = Vec3::new(0.0, -magnitude, 0.0);
    }
}
