use approx::assert_relative_eq;
use arcade_flight::components::{PhysicsComponent, SpatialComponent};
use nalgebra::Vector3;

/// Assert that a spatial component's state is valid
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        spatial.position
    );
    assert!(
        spatial.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        spatial.velocity
    );
    assert!(
        spatial.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite: {:?}",
        spatial.angular_velocity
    );
    assert_relative_eq!(spatial.attitude.as_ref().norm(), 1.0, epsilon = 1e-9);
}

/// Assert that a physics component's state is valid
#[track_caller]
pub fn assert_physics_valid(physics: &PhysicsComponent) {
    assert!(physics.mass > 0.0, "Mass must be positive");
    assert!(physics.mass.is_finite(), "Mass must be finite");
    assert!(
        physics.net_force.iter().all(|x| x.is_finite()),
        "Net force contains non-finite values"
    );
    assert!(
        physics.net_moment.iter().all(|x| x.is_finite()),
        "Net moment contains non-finite values"
    );
    for force in &physics.forces {
        assert!(
            force.vector.iter().all(|x| x.is_finite()),
            "Force contains non-finite values: {:?}",
            force
        );
    }
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert!(
        (actual - expected).norm() <= epsilon,
        "Vectors differ: actual {:?}, expected {:?} (epsilon {})",
        actual,
        expected,
        epsilon
    );
}

/// Assert the velocity changed by `expected` between two snapshots.
#[track_caller]
pub fn assert_velocity_change(
    before: &SpatialComponent,
    after: &SpatialComponent,
    expected: &Vector3<f64>,
    epsilon: f64,
) {
    assert_vector_eq(&(after.velocity - before.velocity), expected, epsilon);
}
