pub mod aerodynamics;
pub mod attachment;
pub mod control;
pub mod physics;
pub mod propulsion;
pub mod respawn;
pub mod telemetry;

pub use aerodynamics::{aerodynamic_surface_system, assisted_lift, assisted_lift_system, normal_force};
pub use attachment::{attachment_pose_system, local_orientation};
pub use control::{
    aileron_target, control_surface_system, is_wings_level, rudder_targets, smooth_deflections,
    target_deflections,
};
pub use physics::{
    calculate_net_forces_moments, clear_forces_system, force_calculator_system, integrate_state,
    physics_integrator_system,
};
pub use propulsion::{thruster_command_system, thruster_force_system};
pub use respawn::{crash_detection_system, input_lock_system, respawn_body, respawn_system};
pub use telemetry::telemetry_system;
