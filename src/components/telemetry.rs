use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Read-only flight data for HUD collaborators, refreshed every frame.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    /// Ground speed over reference speed
    pub speed_ratio: f64,
    /// Magnitude of the relative airflow [m/s]
    pub airflow_speed: f64,
    /// [Pa]
    pub dynamic_pressure: f64,
    /// Throttle setting, `[0, 1]`
    pub throttle: f64,
    /// Nose angle above or below the horizon over 90 degrees
    pub tilt_ratio: f64,
    /// Height over the height reference
    pub height_ratio: f64,
    /// [deg], `[0, 360)`
    pub bank_angle: f64,
}
