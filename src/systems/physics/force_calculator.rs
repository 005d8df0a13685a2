use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{PhysicsComponent, ReferenceFrame, SpatialComponent};
use crate::config::PhysicsConfig;

/// Drop last tick's forces. The list stays readable as a debug trace until here.
pub fn clear_forces_system(mut query: Query<&mut PhysicsComponent>) {
    for mut physics in query.iter_mut() {
        physics.clear_forces();
    }
}

pub fn force_calculator_system(
    mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>,
    config: Res<PhysicsConfig>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.timestep().as_secs_f64();

    for (mut physics, spatial) in query.iter_mut() {
        let (net_force, net_moment) =
            calculate_net_forces_moments(&physics, spatial, &config.gravity, dt);
        physics.net_force = net_force;
        physics.net_moment = net_moment;
    }
}

/// Sum the forces of one tick into a world-frame net force and a body-frame
/// net moment about the centre of mass.
///
/// Every [`ForceMode`](crate::components::ForceMode) is first turned into the
/// continuous force with the same effect over a tick of `dt` seconds.
pub fn calculate_net_forces_moments(
    physics: &PhysicsComponent,
    spatial: &SpatialComponent,
    gravity: &Vector3<f64>,
    dt: f64,
) -> (Vector3<f64>, Vector3<f64>) {
    // Add gravitational force
    let mut net_force = gravity * physics.mass;
    let mut moment_inertial = Vector3::zeros();

    for force in &physics.forces {
        let scale = force.mode.equivalent_force_scale(physics.mass, dt);
        let force_inertial = match force.frame {
            ReferenceFrame::Body => spatial.attitude * force.vector,
            ReferenceFrame::Inertial => force.vector,
        } * scale;

        net_force += force_inertial;

        if let Some(point) = force.point {
            moment_inertial += (point - spatial.position).cross(&force_inertial);
        }
    }

    (net_force, spatial.world_to_body(&moment_inertial))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Force, ForceCategory, ForceMode};
    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;
    use std::f64::consts::FRAC_PI_2;

    fn push(physics: &mut PhysicsComponent, vector: Vector3<f64>, point: Option<Vector3<f64>>, mode: ForceMode) {
        physics.add_force(Force {
            vector,
            point,
            frame: ReferenceFrame::Inertial,
            category: ForceCategory::Aerodynamic,
            mode,
        });
    }

    #[test]
    fn test_gravity_only() {
        let physics = PhysicsComponent::with_principal_inertia(10.0, Vector3::repeat(1.0));
        let spatial = SpatialComponent::default();
        let gravity = PhysicsConfig::default().gravity;
        let (force, moment) = calculate_net_forces_moments(&physics, &spatial, &gravity, 0.02);
        assert_relative_eq!(force, Vector3::new(0.0, -98.1, 0.0), epsilon = 1e-9);
        assert_eq!(moment, Vector3::zeros());
    }

    #[test]
    fn test_force_modes_are_scaled() {
        let spatial = SpatialComponent::default();
        let mut physics = PhysicsComponent::with_principal_inertia(10.0, Vector3::repeat(1.0));
        push(&mut physics, Vector3::x(), None, ForceMode::Force);
        push(&mut physics, Vector3::x(), None, ForceMode::Acceleration);
        push(&mut physics, Vector3::x(), None, ForceMode::Impulse);
        push(&mut physics, Vector3::x(), None, ForceMode::VelocityChange);

        let (force, _) = calculate_net_forces_moments(&physics, &spatial, &Vector3::zeros(), 0.02);
        assert_relative_eq!(force.x, 1.0 + 10.0 + 50.0 + 500.0, epsilon = 1e-9);

        // Halving the tick doubles the force needed for the same instant effect
        let (force, _) = calculate_net_forces_moments(&physics, &spatial, &Vector3::zeros(), 0.01);
        assert_relative_eq!(force.x, 1.0 + 10.0 + 100.0 + 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_offset_force_produces_body_moment() {
        // Body yawed 90 degrees: body +Z points along world +X
        let spatial = SpatialComponent {
            position: Vector3::new(5.0, 0.0, 0.0),
            attitude: UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2),
            ..Default::default()
        };
        let mut physics = PhysicsComponent::with_principal_inertia(1.0, Vector3::repeat(1.0));
        // Upward push one metre ahead of the centre of mass
        push(
            &mut physics,
            Vector3::y(),
            Some(Vector3::new(6.0, 0.0, 0.0)),
            ForceMode::Force,
        );

        let (force, moment) =
            calculate_net_forces_moments(&physics, &spatial, &Vector3::zeros(), 0.02);
        assert_relative_eq!(force, Vector3::y(), epsilon = 1e-12);
        // Nose up is a negative rotation about body +X
        assert_relative_eq!(moment, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    }
}
