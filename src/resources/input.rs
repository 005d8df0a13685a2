use bevy::prelude::*;
use serde::Serialize;

use crate::utils::clamp_finite;

/// Normalised pilot commands, sampled asynchronously from the physics tick.
///
/// Every setter clamps to the documented range; non-finite values read as zero.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PilotInput {
    yaw: f64,
    pitch: f64,
    roll: f64,
    throttle: f64,
    brake: f64,
}

impl PilotInput {
    pub fn new(yaw: f64, pitch: f64, roll: f64, throttle: f64, brake: f64) -> Self {
        let mut input = Self::default();
        input.set_yaw(yaw);
        input.set_pitch(pitch);
        input.set_roll(roll);
        input.set_throttle(throttle);
        input.set_brake(brake);
        input
    }

    /// `[-1, 1]`
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// `[-1, 1]`
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// `[-1, 1]`
    pub fn roll(&self) -> f64 {
        self.roll
    }

    /// `[0, 1]`
    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    /// `[0, 1]`
    pub fn brake(&self) -> f64 {
        self.brake
    }

    pub fn set_yaw(&mut self, yaw: f64) {
        self.yaw = clamp_finite(yaw, -1.0, 1.0);
    }

    pub fn set_pitch(&mut self, pitch: f64) {
        self.pitch = clamp_finite(pitch, -1.0, 1.0);
    }

    pub fn set_roll(&mut self, roll: f64) {
        self.roll = clamp_finite(roll, -1.0, 1.0);
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = clamp_finite(throttle, 0.0, 1.0);
    }

    pub fn set_brake(&mut self, brake: f64) {
        self.brake = clamp_finite(brake, 0.0, 1.0);
    }

    /// Map a steering stick to yaw and pitch. Pushing the stick forward
    /// (positive `y`) pitches down unless `invert_y` is set.
    pub fn apply_steer(&mut self, x: f64, y: f64, invert_x: bool, invert_y: bool) {
        self.set_yaw(if invert_x { -x } else { x });
        self.set_pitch(if invert_y { y } else { -y });
    }

    /// Map a roll axis, positive rolls left.
    pub fn apply_roll(&mut self, value: f64) {
        self.set_roll(-value);
    }
}
