mod lift;
mod surface;

pub use lift::{assisted_lift, assisted_lift_system};
pub use surface::{aerodynamic_surface_system, normal_force};
