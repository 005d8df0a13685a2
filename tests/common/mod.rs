#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{
    assert_physics_valid, assert_spatial_valid, assert_vector_eq, assert_velocity_change,
};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
