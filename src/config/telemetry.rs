use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_HEIGHT_REFERENCE;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Height mapped to a full altitude bar [m]
    pub height_reference: f64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            height_reference: DEFAULT_HEIGHT_REFERENCE,
        }
    }
}
