use bevy::prelude::*;
use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};

/// Which actuator pair drives a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlChannel {
    Flap,
    Aileron,
    Elevator,
    Rudder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Flaps follow pitch and drop further when braking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlapConfig {
    /// Deflection at full pitch input [deg]
    pub max_deflection: f64,
    /// Extra deflection at full brake [deg]
    pub brake_extra_deflection: f64,
}

/// Ailerons follow roll, with opposite sign on each wing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AileronConfig {
    /// Deflection at full roll input [deg]
    pub max_deflection: f64,
    /// Roll back towards level when the stick is released
    #[serde(default)]
    pub auto_level: bool,
}

/// Elevators follow pitch and help turning with a yaw-coupled differential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevatorConfig {
    /// Deflection at full pitch input [deg]
    pub max_deflection: f64,
    /// Differential deflection at full yaw input [deg]
    pub turn_extra_deflection: f64,
}

/// Rudders follow yaw; the rudder on the outside of the turn deflects less.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RudderConfig {
    /// Deflection at full yaw input [deg]
    pub max_deflection: f64,
    /// Fraction of the inner rudder's angle used by the outer rudder, `[0, 1]`
    pub outer_rudder_ratio: f64,
}

/// Angular smoothing applied between the target and the applied deflection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Smoothing {
    pub enabled: bool,
    /// Fraction of the remaining arc covered per second
    pub rate: f64,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 8.0,
        }
    }
}

impl Smoothing {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            rate: 0.0,
        }
    }

    /// Whether applied angles snap straight to their targets.
    pub fn snaps(&self) -> bool {
        !self.enabled || self.rate <= 0.0
    }
}

/// Actuator configuration of a body's control surfaces.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSurfaces {
    pub flaps: FlapConfig,
    pub ailerons: AileronConfig,
    pub elevators: ElevatorConfig,
    pub rudders: RudderConfig,
    pub smoothing: Smoothing,
}

impl Default for ControlSurfaces {
    fn default() -> Self {
        Self {
            flaps: FlapConfig {
                max_deflection: 15.0,
                brake_extra_deflection: 10.0,
            },
            ailerons: AileronConfig {
                max_deflection: 20.0,
                auto_level: true,
            },
            elevators: ElevatorConfig {
                max_deflection: 20.0,
                turn_extra_deflection: 8.0,
            },
            rudders: RudderConfig {
                max_deflection: 25.0,
                outer_rudder_ratio: 0.5,
            },
            smoothing: Smoothing::default(),
        }
    }
}

/// Applied angle of a left/right pair [deg].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfacePair {
    pub left: f64,
    pub right: f64,
}

impl SurfacePair {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub fn symmetric(angle: f64) -> Self {
        Self::new(angle, angle)
    }

    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Deflections currently applied to a body's control surfaces.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Deflections {
    pub flaps: SurfacePair,
    pub ailerons: SurfacePair,
    pub elevators: SurfacePair,
    pub rudders: SurfacePair,
}

impl Deflections {
    pub fn pair(&self, channel: ControlChannel) -> &SurfacePair {
        match channel {
            ControlChannel::Flap => &self.flaps,
            ControlChannel::Aileron => &self.ailerons,
            ControlChannel::Elevator => &self.elevators,
            ControlChannel::Rudder => &self.rudders,
        }
    }

    pub fn angle(&self, channel: ControlChannel, side: Side) -> f64 {
        self.pair(channel).side(side)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Links a surface entity to one side of an actuator pair on its body.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct ControlSurfaceBinding {
    pub channel: ControlChannel,
    pub side: Side,
    /// Hinge in the surface's neutral frame
    pub hinge_axis: Unit<Vector3<f64>>,
}

impl ControlSurfaceBinding {
    pub fn new(channel: ControlChannel, side: Side, hinge_axis: Vector3<f64>) -> Self {
        Self {
            channel,
            side,
            hinge_axis: Unit::new_normalize(hinge_axis),
        }
    }
}
