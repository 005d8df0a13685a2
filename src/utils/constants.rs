pub const GRAVITY: f64 = 9.81; // m/s^2
pub const DEFAULT_AIR_DENSITY: f64 = 1.0; // arcade units, not ISA

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 50.0; // s
pub const DEFAULT_REFERENCE_SPEED: f64 = 40.0; // m/s
pub const DEFAULT_HEIGHT_REFERENCE: f64 = 400.0; // m

// Below this displacement (m) per tick the airflow direction is undefined
pub const MIN_DISPLACEMENT: f64 = 1e-9;

// Aileron auto-levelling
pub const AUTO_LEVEL_DEAD_ZONE_DEG: f64 = 6.0;
pub const INVERTED_FLIGHT_PREFERENCE_DEG: f64 = -25.0;
pub const AUTO_LEVEL_DEFLECTION_FRACTION: f64 = 1.0 / 3.0;

// Respawn
pub const CRASH_IMPULSE_THRESHOLD: f64 = 5.0;
pub const RESPAWN_ALTITUDE_OFFSET: f64 = 120.0; // m
pub const RESPAWN_SPEED: f64 = 120.0; // m/s
pub const RESPAWN_LOCK_DURATION: f64 = 1.0; // s
