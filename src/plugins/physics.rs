use bevy::prelude::*;

use crate::config::PhysicsConfig;
use crate::plugins::FlightSet;
use crate::systems::{clear_forces_system, force_calculator_system, physics_integrator_system};

/// Rigid-body integration of every body carrying a `PhysicsComponent`.
///
/// Replaceable: the flight systems only push forces and read spatial state.
pub struct PhysicsPlugin {
    pub config: PhysicsConfig,
}

impl Default for PhysicsPlugin {
    fn default() -> Self {
        Self {
            config: PhysicsConfig::default(),
        }
    }
}

impl PhysicsPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        // Every fixed system reads its tick length from this clock
        app.insert_resource(Time::<Fixed>::from_seconds(self.config.timestep));

        app.configure_sets(FixedUpdate, FlightSet::chain());

        app.add_systems(
            FixedUpdate,
            (
                clear_forces_system.in_set(FlightSet::Prepare),
                force_calculator_system.in_set(FlightSet::Forces),
                physics_integrator_system.in_set(FlightSet::Integration),
            ),
        );
    }
}
