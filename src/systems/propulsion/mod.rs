mod thruster;

pub use thruster::{thruster_command_system, thruster_force_system};
