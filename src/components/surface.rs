use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Body-frame axes a surface is not allowed to push along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisClamp {
    #[serde(default)]
    pub x: bool,
    #[serde(default)]
    pub y: bool,
    #[serde(default)]
    pub z: bool,
}

impl AxisClamp {
    pub const NONE: Self = Self {
        x: false,
        y: false,
        z: false,
    };

    /// Zero the clamped components of a body-frame vector.
    pub fn apply(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            if self.x { 0.0 } else { vector.x },
            if self.y { 0.0 } else { vector.y },
            if self.z { 0.0 } else { vector.z },
        )
    }
}

/// A flat panel that turns airflow against its normal (local `+Z`) into force.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AerodynamicSurface {
    /// Panel area [m²]
    pub area: f64,
    pub force_multiplier: f64,
    pub clamp_axes: AxisClamp,

    /// World position recorded at the previous tick boundary
    pub previous_position: Option<Vector3<f64>>,
    /// Displacement since the previous tick [m]
    pub displacement: Vector3<f64>,
    /// Cosine between normal and incoming air, in `[-1, 1]`
    pub incidence: f64,
    /// Scalar normal force from the last tick
    pub force_magnitude: f64,
}

impl Default for AerodynamicSurface {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl AerodynamicSurface {
    pub fn new(area: f64) -> Self {
        Self {
            area,
            force_multiplier: 1.0,
            clamp_axes: AxisClamp::NONE,
            previous_position: None,
            displacement: Vector3::zeros(),
            incidence: 0.0,
            force_magnitude: 0.0,
        }
    }

    /// Rectangular panel of `width` × `height`.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new(width * height)
    }

    pub fn with_force_multiplier(mut self, multiplier: f64) -> Self {
        self.force_multiplier = multiplier;
        self
    }

    pub fn with_clamp_axes(mut self, clamp_axes: AxisClamp) -> Self {
        self.clamp_axes = clamp_axes;
        self
    }

    /// Forget the position history, e.g. after a teleport.
    pub fn reset_history(&mut self) {
        self.previous_position = None;
        self.displacement = Vector3::zeros();
        self.incidence = 0.0;
        self.force_magnitude = 0.0;
    }
}
