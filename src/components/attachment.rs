use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Mounts an entity on an [`AerodynamicBody`](crate::components::AerodynamicBody).
///
/// The body reference is non-owning; a missing or despawned body turns the
/// attached surface or thruster into a no-op.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub body: Option<Entity>,
    /// Offset from the body's centre of mass, body frame [m]
    pub offset: Vector3<f64>,
    /// Neutral orientation relative to the body
    pub orientation: UnitQuaternion<f64>,
}

impl Attachment {
    pub fn new(body: Entity, offset: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            body: Some(body),
            offset,
            orientation,
        }
    }

    pub fn detached(offset: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            body: None,
            offset,
            orientation,
        }
    }
}

/// World pose of an attached entity, refreshed at the start of every tick.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct WorldPose {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl Default for WorldPose {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }
}

impl WorldPose {
    /// Local `+Z` in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.orientation * Vector3::z()
    }
}
