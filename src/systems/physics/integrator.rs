use std::ops::{Add, Mul};

use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{PhysicsComponent, SpatialComponent};
use crate::config::PhysicsConfig;

/// Advance every body by one fixed tick using this tick's net force and moment.
pub fn physics_integrator_system(
    mut query: Query<(&PhysicsComponent, &mut SpatialComponent)>,
    config: Res<PhysicsConfig>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.timestep().as_secs_f64();

    query.par_iter_mut().for_each(|(physics, mut spatial)| {
        integrate_state(physics, &mut spatial, dt);
        apply_velocity_limits(
            &mut spatial,
            config.max_velocity,
            config.max_angular_velocity,
        );
    });
}

/// Time derivative of position, velocity and body rates.
#[derive(Debug, Clone, Copy)]
struct Rates {
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    angular_velocity: Vector3<f64>,
}

impl Add for Rates {
    type Output = Rates;

    fn add(self, other: Rates) -> Rates {
        Rates {
            position: self.position + other.position,
            velocity: self.velocity + other.velocity,
            angular_velocity: self.angular_velocity + other.angular_velocity,
        }
    }
}

impl Mul<f64> for Rates {
    type Output = Rates;

    fn mul(self, scale: f64) -> Rates {
        Rates {
            position: self.position * scale,
            velocity: self.velocity * scale,
            angular_velocity: self.angular_velocity * scale,
        }
    }
}

/// Euler's rigid-body equations with the net force and moment held constant
/// over the tick.
fn rates(
    physics: &PhysicsComponent,
    velocity: &Vector3<f64>,
    angular_velocity: &Vector3<f64>,
) -> Rates {
    let gyroscopic = angular_velocity.cross(&(physics.inertia * angular_velocity));
    Rates {
        position: *velocity,
        velocity: physics.net_force / physics.mass,
        angular_velocity: physics.inertia_inv * (physics.net_moment - gyroscopic),
    }
}

/// One classic RK4 step of length `dt`.
///
/// Body rates live in the body frame, so the attitude advances by
/// right-multiplying the rotation of the stage-averaged rate.
pub fn integrate_state(physics: &PhysicsComponent, spatial: &mut SpatialComponent, dt: f64) {
    let velocity = spatial.velocity;
    let angular_velocity = spatial.angular_velocity;

    let mut stage_rates = Vec::with_capacity(4);
    let mut stage_omegas = Vec::with_capacity(4);
    let mut stage = rates(physics, &velocity, &angular_velocity);
    stage_omegas.push(angular_velocity);
    stage_rates.push(stage);

    for fraction in [0.5, 0.5, 1.0] {
        let stage_velocity = velocity + stage.velocity * (dt * fraction);
        let stage_omega = angular_velocity + stage.angular_velocity * (dt * fraction);
        stage = rates(physics, &stage_velocity, &stage_omega);
        stage_omegas.push(stage_omega);
        stage_rates.push(stage);
    }

    let step = (stage_rates[0]
        + stage_rates[1] * 2.0
        + stage_rates[2] * 2.0
        + stage_rates[3])
        * (dt / 6.0);
    spatial.position += step.position;
    spatial.velocity += step.velocity;
    spatial.angular_velocity += step.angular_velocity;

    let mean_omega =
        (stage_omegas[0] + stage_omegas[1] * 2.0 + stage_omegas[2] * 2.0 + stage_omegas[3]) / 6.0;
    if mean_omega.norm() > 0.0 {
        let rotated = spatial.attitude * UnitQuaternion::from_scaled_axis(mean_omega * dt);
        spatial.attitude = UnitQuaternion::new_normalize(rotated.into_inner());
    }
}

/// Scale velocity and body rates back onto their magnitude limits.
pub fn apply_velocity_limits(
    spatial: &mut SpatialComponent,
    max_velocity: f64,
    max_angular_velocity: f64,
) {
    let speed = spatial.velocity.norm();
    if speed > max_velocity {
        spatial.velocity *= max_velocity / speed;
    }

    let rate = spatial.angular_velocity.norm();
    if rate > max_angular_velocity {
        spatial.angular_velocity *= max_angular_velocity / rate;
    }
}
