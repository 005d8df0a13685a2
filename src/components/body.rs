use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{
    Force, ForceCategory, ForceMode, PhysicsComponent, ReferenceFrame, SpatialComponent,
};
use crate::resources::Meteorology;
use crate::utils::DEFAULT_REFERENCE_SPEED;

/// Aggregation root of a flying object.
///
/// Surfaces and thrusters attached to this entity push their forces through
/// [`AerodynamicBody::apply_force_at_point`]; the rigid-body state itself stays
/// in [`SpatialComponent`] and [`PhysicsComponent`].
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AerodynamicBody {
    /// Global scale on every surface force of this body.
    pub default_force: f64,
    /// Speed at which `speed_ratio` reaches one [m/s].
    pub reference_speed: f64,
    /// Log every applied force at trace level.
    pub trace_forces: bool,
}

impl Default for AerodynamicBody {
    fn default() -> Self {
        Self {
            default_force: 1.0,
            reference_speed: DEFAULT_REFERENCE_SPEED,
            trace_forces: false,
        }
    }
}

impl AerodynamicBody {
    pub fn new(default_force: f64, reference_speed: f64) -> Self {
        Self {
            default_force,
            reference_speed,
            ..Default::default()
        }
    }

    /// Push a world-frame force acting at a world point into the body.
    pub fn apply_force_at_point(
        &self,
        physics: &mut PhysicsComponent,
        force: Vector3<f64>,
        point: Vector3<f64>,
        mode: ForceMode,
        category: ForceCategory,
    ) {
        if self.trace_forces {
            trace!(
                "{:?} force {:?} at {:?} ({:?})",
                category,
                force,
                point,
                mode
            );
        }
        physics.add_force(Force {
            vector: force,
            point: Some(point),
            frame: ReferenceFrame::Inertial,
            category,
            mode,
        });
    }

    /// Apparent wind felt by the body: `-velocity + wind`.
    pub fn relative_airflow(
        &self,
        spatial: &SpatialComponent,
        meteorology: &Meteorology,
    ) -> Vector3<f64> {
        -spatial.velocity + meteorology.wind_velocity
    }

    /// Ground speed as a fraction of the reference speed.
    pub fn speed_ratio(&self, spatial: &SpatialComponent) -> f64 {
        if self.reference_speed > 0.0 {
            spatial.velocity.norm() / self.reference_speed
        } else {
            0.0
        }
    }

    /// `½·ρ·|airflow|²` [Pa]
    pub fn dynamic_pressure(&self, spatial: &SpatialComponent, meteorology: &Meteorology) -> f64 {
        0.5 * meteorology.air_density * self.relative_airflow(spatial, meteorology).norm_squared()
    }

    /// Overwrite the body velocity, bypassing force integration.
    pub fn set_velocity(&self, spatial: &mut SpatialComponent, velocity: Vector3<f64>) {
        spatial.velocity = velocity;
    }
}

/// Extra upward push proportional to speed, keeping arcade planes airborne.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AssistedLift {
    /// Upward acceleration at reference speed with wings level [m/s²]
    pub lift_force: f64,
}
