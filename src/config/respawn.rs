use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{
    CRASH_IMPULSE_THRESHOLD, RESPAWN_ALTITUDE_OFFSET, RESPAWN_LOCK_DURATION, RESPAWN_SPEED,
};

/// Crash detection and respawn parameters.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct RespawnConfig {
    /// Minimum impact impulse that destroys the plane [N·s]
    pub crash_impulse: f64,
    /// Height added to the crash point when respawning [m]
    pub altitude_offset: f64,
    /// Forward speed after respawn [m/s]
    pub respawn_speed: f64,
    /// Seconds of ignored pilot input after respawn
    pub lock_duration: f64,
}

impl Default for RespawnConfig {
    fn default() -> Self {
        Self {
            crash_impulse: CRASH_IMPULSE_THRESHOLD,
            altitude_offset: RESPAWN_ALTITUDE_OFFSET,
            respawn_speed: RESPAWN_SPEED,
            lock_duration: RESPAWN_LOCK_DURATION,
        }
    }
}
