use bevy::prelude::*;
use nalgebra::Vector3;

/// A body hit something. Fed by whatever collision layer the app uses.
#[derive(Event, Debug, Clone)]
pub struct ImpactEvent {
    pub body: Entity,
    /// Magnitude of the collision impulse [N·s]
    pub impulse: f64,
    /// World position of the body at impact
    pub position: Vector3<f64>,
}

/// An impact hard enough to destroy the plane.
#[derive(Event, Debug, Clone)]
pub struct CrashEvent {
    pub body: Entity,
    pub position: Vector3<f64>,
}

/// The plane was put back in the air after a crash.
#[derive(Event, Debug, Clone)]
pub struct RespawnEvent {
    pub body: Entity,
    pub position: Vector3<f64>,
}
