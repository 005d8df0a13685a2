mod common;

use approx::assert_relative_eq;
use arcade_flight::components::{
    AerodynamicSurface, Attachment, AxisClamp, ForceCategory, ForceMode, PhysicsComponent,
    SpatialComponent, WorldPose,
};
use arcade_flight::resources::EnvironmentConfig;
use bevy::prelude::*;
use common::*;
use nalgebra::{UnitQuaternion, Vector3};

#[test]
fn test_first_tick_has_no_displacement() {
    let mut app = TestAppBuilder::new()
        .with_physics(test_physics())
        .with_unpiloted_aircraft(single_panel_aircraft(
            2.0,
            Vector3::zeros(),
            Vector3::new(0.0, 0.0, 50.0),
        ))
        .build();
    let body = app.body();
    let panel = app.part(body, "panel");

    app.run_fixed_tick();

    let surface = app.get::<AerodynamicSurface>(panel);
    assert_eq!(surface.displacement, Vector3::zeros());
    assert_eq!(surface.incidence, 0.0);
    assert!(app.get::<PhysicsComponent>(body).forces.is_empty());
    assert_relative_eq!(app.get::<SpatialComponent>(body).velocity.z, 50.0);
}

#[test]
fn test_head_on_panel_is_pushed_back() {
    let mut app = TestAppBuilder::new()
        .with_physics(test_physics())
        .with_unpiloted_aircraft(single_panel_aircraft(
            2.0,
            Vector3::zeros(),
            Vector3::new(0.0, 0.0, 50.0),
        ))
        .build();
    let body = app.body();
    let panel = app.part(body, "panel");

    app.run_fixed_tick();
    let before = app.get::<SpatialComponent>(body).clone();
    app.run_fixed_tick();

    let surface = app.get::<AerodynamicSurface>(panel);
    assert_vector_eq(&surface.displacement, &Vector3::new(0.0, 0.0, 1.0), 1e-9);
    assert_relative_eq!(surface.incidence, -1.0, epsilon = 1e-9);
    assert_relative_eq!(surface.force_magnitude, -2.0, epsilon = 1e-9);

    let physics = app.get::<PhysicsComponent>(body);
    let forces: Vec<_> = physics.forces_of(ForceCategory::Aerodynamic).collect();
    assert_eq!(forces.len(), 1);
    assert_eq!(forces[0].mode, ForceMode::VelocityChange);
    assert_vector_eq(&forces[0].vector, &Vector3::new(0.0, 0.0, -2.0), 1e-9);
    assert_vector_eq(
        &forces[0].point.expect("surface force has a point"),
        &before.position,
        1e-9,
    );

    // Velocity change ignores mass
    let after = app.get::<SpatialComponent>(body);
    assert_velocity_change(&before, after, &Vector3::new(0.0, 0.0, -2.0), 1e-9);
    assert_physics_valid(physics);
}

#[test]
fn test_stationary_body_feels_nothing() {
    let mut app = TestAppBuilder::new()
        .with_physics(test_physics())
        .with_unpiloted_aircraft(single_panel_aircraft(
            5.0,
            Vector3::new(-90.0, 0.0, 0.0),
            Vector3::zeros(),
        ))
        .build();
    let body = app.body();

    app.run_fixed_ticks(5);

    let spatial = app.get::<SpatialComponent>(body);
    assert_eq!(spatial.velocity, Vector3::zeros());
    assert!(app.get::<PhysicsComponent>(body).forces.is_empty());
    assert_spatial_valid(spatial);
}

#[test]
fn test_wind_acts_from_the_first_tick() {
    let mut app = TestAppBuilder::new()
        .with_physics(test_physics())
        .with_environment(EnvironmentConfig::with_wind(Vector3::new(0.0, 0.0, -50.0)))
        .with_unpiloted_aircraft(single_panel_aircraft(
            1.0,
            Vector3::zeros(),
            Vector3::zeros(),
        ))
        .build();
    let body = app.body();
    let panel = app.part(body, "panel");

    app.run_fixed_tick();

    assert_relative_eq!(app.get::<AerodynamicSurface>(panel).incidence, -1.0, epsilon = 1e-9);
    assert_relative_eq!(
        app.get::<SpatialComponent>(body).velocity.z,
        -1.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_wind_spans_the_host_fixed_period() {
    // 100 Hz host clock against a 50 Hz physics config
    let mut app = TestAppBuilder::new()
        .with_physics(test_physics())
        .with_fixed_timestep(0.01)
        .with_environment(EnvironmentConfig::with_wind(Vector3::new(0.0, 0.0, -50.0)))
        .with_unpiloted_aircraft(single_panel_aircraft(
            10.0,
            Vector3::zeros(),
            Vector3::zeros(),
        ))
        .build();
    let body = app.body();
    let panel = app.part(body, "panel");

    app.run_fixed_tick();

    // Half a metre of air per tick: 10 · 0.5²
    let surface = app.get::<AerodynamicSurface>(panel);
    assert_relative_eq!(surface.incidence, -1.0, epsilon = 1e-9);
    assert_relative_eq!(surface.force_magnitude, -2.5, epsilon = 1e-9);
    assert_relative_eq!(
        app.get::<SpatialComponent>(body).velocity.z,
        -2.5,
        epsilon = 1e-9
    );
}

#[test]
fn test_clamped_axes_remove_force_components() {
    // Panel yawed 45 degrees, so its normal has X and Z components
    let mut config = single_panel_aircraft(
        1.0,
        Vector3::new(0.0, 45.0, 0.0),
        Vector3::new(0.0, 0.0, 50.0),
    );
    config.surfaces[0].clamp_axes = AxisClamp {
        x: true,
        y: false,
        z: false,
    };
    let mut app = TestAppBuilder::new()
        .with_physics(test_physics())
        .with_unpiloted_aircraft(config)
        .build();
    let body = app.body();

    app.run_fixed_ticks(2);

    let physics = app.get::<PhysicsComponent>(body);
    let force = physics
        .forces_of(ForceCategory::Aerodynamic)
        .next()
        .map(|force| force.vector)
        .expect("aerodynamic force");
    assert_eq!(force.x, 0.0);
    assert_eq!(force.y, 0.0);
    // incidence -cos(45°), |d|² = 1, direction z = cos(45°)
    assert_relative_eq!(force.z, -0.5, epsilon = 1e-9);
}

#[test]
fn test_multiplier_and_default_force_scale_output() {
    let mut config = single_panel_aircraft(2.0, Vector3::zeros(), Vector3::new(0.0, 0.0, 50.0));
    config.body.default_force = 0.5;
    config.surfaces[0].force_multiplier = 3.0;
    let mut app = TestAppBuilder::new()
        .with_physics(test_physics())
        .with_unpiloted_aircraft(config)
        .build();
    let body = app.body();

    app.run_fixed_ticks(2);

    let physics = app.get::<PhysicsComponent>(body);
    let force = &physics.forces[0];
    assert_vector_eq(&force.vector, &Vector3::new(0.0, 0.0, -3.0), 1e-9);
}

#[test]
fn test_detached_surface_only_tracks_history() {
    let mut app = TestAppBuilder::new().with_physics(test_physics()).build();
    let surface = app
        .app
        .world_mut()
        .spawn((
            AerodynamicSurface::new(1.0),
            Attachment::detached(Vector3::new(1.0, 2.0, 3.0), UnitQuaternion::identity()),
            WorldPose::default(),
        ))
        .id();

    app.run_fixed_ticks(2);

    let state = app.get::<AerodynamicSurface>(surface);
    assert_eq!(state.previous_position, Some(Vector3::new(1.0, 2.0, 3.0)));
    assert_eq!(state.incidence, 0.0);
    assert_eq!(state.force_magnitude, 0.0);
}

#[test]
fn test_despawned_body_leaves_surface_inert() {
    let mut app = TestAppBuilder::new()
        .with_physics(test_physics())
        .with_unpiloted_aircraft(single_panel_aircraft(
            1.0,
            Vector3::zeros(),
            Vector3::new(0.0, 0.0, 50.0),
        ))
        .build();
    let body = app.body();
    let panel = app.part(body, "panel");

    app.run_fixed_tick();
    app.app.world_mut().despawn(body);
    app.run_fixed_ticks(2);

    let surface = app.get::<AerodynamicSurface>(panel);
    assert_eq!(surface.force_magnitude, 0.0);
    assert!(surface.previous_position.is_some());
}
