mod actuator;

pub use actuator::{
    aileron_target, control_surface_system, is_wings_level, rudder_targets, smooth_deflections,
    target_deflections,
};
