use bevy::prelude::*;

use crate::components::{
    AerodynamicBody, AssistedLift, ForceCategory, ForceMode, PhysicsComponent, SpatialComponent,
};
use crate::utils::deg_to_rad;

/// Upward acceleration from [`AssistedLift`], scaled by speed and by how level
/// the wings are.
pub fn assisted_lift(lift: &AssistedLift, body: &AerodynamicBody, spatial: &SpatialComponent) -> f64 {
    let angle_factor = deg_to_rad(spatial.bank_angle_deg()).cos();
    lift.lift_force * body.speed_ratio(spatial) * angle_factor
}

pub fn assisted_lift_system(
    mut query: Query<(
        &AssistedLift,
        &AerodynamicBody,
        &SpatialComponent,
        &mut PhysicsComponent,
    )>,
) {
    for (lift, body, spatial, mut physics) in query.iter_mut() {
        let magnitude = assisted_lift(lift, body, spatial);
        if magnitude == 0.0 {
            continue;
        }
        body.apply_force_at_point(
            &mut physics,
            spatial.up() * magnitude,
            spatial.position,
            ForceMode::Acceleration,
            ForceCategory::Aerodynamic,
        );
    }
}
