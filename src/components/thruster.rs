use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::Serialize;

use crate::utils::{clamp_finite, deg_to_rad};

/// A vectorable jet nozzle pushing its body along the nozzle's forward axis.
#[derive(Component, Debug, Clone, Serialize)]
pub struct Thruster {
    /// Acceleration at full power [m/s²]
    pub thrust_force: f64,
    /// Nozzle deflection at full vector input [deg]
    pub max_vector_angle: f64,
    /// Cover opening at full power [deg]
    pub max_opening_angle: f64,
    /// Exhaust emission rate at full power [particles/s]
    pub max_emission_rate: f64,

    /// Power fraction, `[0, 1]`
    power: f64,
    /// Normalised vector input, `[-1, 1]`
    vector_input: f64,
}

impl Default for Thruster {
    fn default() -> Self {
        Self::new(20.0, 15.0, 20.0)
    }
}

impl Thruster {
    pub fn new(thrust_force: f64, max_vector_angle: f64, max_opening_angle: f64) -> Self {
        Self {
            thrust_force,
            max_vector_angle,
            max_opening_angle,
            max_emission_rate: 100.0,
            power: 0.0,
            vector_input: 0.0,
        }
    }

    pub fn with_max_emission_rate(mut self, rate: f64) -> Self {
        self.max_emission_rate = rate;
        self
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn vector_input(&self) -> f64 {
        self.vector_input
    }

    /// Set the power fraction. Cover opening and emission follow from it.
    pub fn set_power(&mut self, power: f64) {
        self.power = clamp_finite(power, 0.0, 1.0);
    }

    /// Set the normalised vector deflection.
    pub fn set_angle(&mut self, angle: f64) {
        self.vector_input = clamp_finite(angle, -1.0, 1.0);
    }

    /// Nozzle deflection about its local X axis [deg]
    pub fn vector_angle(&self) -> f64 {
        self.vector_input * self.max_vector_angle
    }

    /// Cover opening [deg]
    pub fn opening_angle(&self) -> f64 {
        self.max_opening_angle * self.power
    }

    /// Top and bottom cover angles [deg]
    pub fn cover_angles(&self) -> (f64, f64) {
        let vector = self.vector_angle();
        let opening = self.opening_angle();
        (vector - opening, vector + opening)
    }

    pub fn emission_rate(&self) -> f64 {
        self.power * self.max_emission_rate
    }

    pub fn is_emitting(&self) -> bool {
        self.power > 0.0
    }

    /// Nozzle rotation relative to its mount.
    pub fn nozzle_rotation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), deg_to_rad(self.vector_angle()))
    }

    /// Thrust vector along a world-space nozzle direction.
    pub fn thrust(&self, nozzle_forward: &Vector3<f64>) -> Vector3<f64> {
        nozzle_forward * (self.power * self.thrust_force)
    }
}
