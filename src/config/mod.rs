mod aircraft;
mod loader;
mod physics;
mod respawn;
mod telemetry;

pub use aircraft::{
    AircraftConfig, ControlBindingConfig, StartConfig, SurfaceConfig, ThrusterConfig,
};
pub use loader::ConfigError;
pub use physics::PhysicsConfig;
pub use respawn::RespawnConfig;
pub use telemetry::TelemetryConfig;
