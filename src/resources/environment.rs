use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_AIR_DENSITY;

/// Ambient air shared by every body in the world.
///
/// Simulation control may change it between ticks; flight systems only read it.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meteorology {
    /// [m/s], world frame
    pub wind_velocity: Vector3<f64>,
    pub air_density: f64,
}

impl Default for Meteorology {
    fn default() -> Self {
        Self {
            wind_velocity: Vector3::zeros(),
            air_density: DEFAULT_AIR_DENSITY,
        }
    }
}

impl Meteorology {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            wind_velocity: config.wind_velocity,
            air_density: config.air_density,
        }
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub wind_velocity: Vector3<f64>,
    #[serde(default = "default_air_density")]
    pub air_density: f64,
}

fn default_air_density() -> f64 {
    DEFAULT_AIR_DENSITY
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            wind_velocity: Vector3::zeros(),
            air_density: DEFAULT_AIR_DENSITY,
        }
    }
}

impl EnvironmentConfig {
    pub fn with_wind(wind_velocity: Vector3<f64>) -> Self {
        Self {
            wind_velocity,
            ..Default::default()
        }
    }

    /// Horizontal wind blowing towards `bearing` degrees, measured from `+Z` towards `+X`.
    pub fn with_constant_wind(wind_speed: f64, bearing: f64) -> Self {
        let angle_rad = bearing.to_radians();
        Self::with_wind(Vector3::new(
            wind_speed * angle_rad.sin(),
            0.0,
            wind_speed * angle_rad.cos(),
        ))
    }
}
