use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{DEFAULT_TIMESTEP, GRAVITY};

/// Configuration for the physics system
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    // Integration parameters
    pub max_velocity: f64,
    pub max_angular_velocity: f64,
    pub timestep: f64,

    // Force parameters
    pub gravity: Vector3<f64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_velocity: 200.0,        // m/s
            max_angular_velocity: 10.0, // rad/s
            timestep: DEFAULT_TIMESTEP, // 50 Hz
            gravity: Vector3::new(0.0, -GRAVITY, 0.0),
        }
    }
}

impl PhysicsConfig {
    /// No gravity and no velocity limits, for isolating individual forces.
    pub fn frictionless(timestep: f64) -> Self {
        Self {
            max_velocity: f64::INFINITY,
            max_angular_velocity: f64::INFINITY,
            timestep,
            gravity: Vector3::zeros(),
        }
    }
}
