mod aircraft;
mod environment;
mod events;
mod flight;
mod physics;

pub use aircraft::{spawn_aircraft, AircraftPlugin};
pub use environment::EnvironmentPlugin;
pub use events::{CrashEvent, ImpactEvent, RespawnEvent};
pub use flight::{ControlSet, FlightPlugin, FlightSet};
pub use physics::PhysicsPlugin;
