use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{rad_to_deg, wrap_degrees};

/// Rigid-body state of a flying object.
///
/// World frame is Y-up. Body frame is `+Z` forward, `+Y` up, `+X` right.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position of the centre of mass in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Rotate a body-frame vector into the world frame.
    pub fn body_to_world(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.attitude * vector
    }

    /// Rotate a world-frame vector into the body frame.
    pub fn world_to_body(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.attitude.inverse() * vector
    }

    /// World position of a point given as a body-frame offset from the centre of mass.
    pub fn point_to_world(&self, offset: &Vector3<f64>) -> Vector3<f64> {
        self.position + self.attitude * offset
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }

    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    /// Roll about the forward axis in degrees, wrapped into `[0, 360)`.
    pub fn bank_angle_deg(&self) -> f64 {
        let right = self.right();
        let up = self.up();
        if right.y.abs() < f64::EPSILON && up.y.abs() < f64::EPSILON {
            // Nose straight up or down: roll is undefined
            return 0.0;
        }
        wrap_degrees(rad_to_deg(right.y.atan2(up.y)))
    }

    /// Angle between the nose and the horizon in degrees, always positive.
    pub fn tilt_deg(&self) -> f64 {
        let forward = self.forward();
        let horizontal = (forward.x * forward.x + forward.z * forward.z).sqrt();
        rad_to_deg(forward.y.abs().atan2(horizontal))
    }

    /// Drop pitch and roll while keeping heading.
    pub fn level_attitude(&self) -> UnitQuaternion<f64> {
        let forward = self.forward();
        let heading = forward.x.atan2(forward.z);
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), heading)
    }
}
