use arcade_flight::{
    components::{AerodynamicBody, AxisClamp, ControlSurfaces, Smoothing},
    config::{AircraftConfig, PhysicsConfig, StartConfig, SurfaceConfig, ThrusterConfig},
};
use nalgebra::Vector3;

pub const TEST_TIMESTEP: f64 = 0.02;

/// No gravity, no velocity limits, 50 Hz.
pub fn test_physics() -> PhysicsConfig {
    PhysicsConfig::frictionless(TEST_TIMESTEP)
}

/// A bare one-kilogram body with no surfaces or thrusters.
pub fn bare_aircraft(velocity: Vector3<f64>) -> AircraftConfig {
    AircraftConfig {
        name: "TestBody".to_string(),
        mass: 1.0,
        inertia: Vector3::repeat(1.0),
        body: AerodynamicBody::new(1.0, 40.0),
        assisted_lift: None,
        controls: ControlSurfaces::default(),
        surfaces: Vec::new(),
        thrusters: Vec::new(),
        start: StartConfig {
            position: Vector3::new(0.0, 100.0, 0.0),
            velocity,
            heading: 0.0,
        },
    }
}

/// A body carrying one panel at its centre of mass.
pub fn single_panel_aircraft(
    area: f64,
    orientation: Vector3<f64>,
    velocity: Vector3<f64>,
) -> AircraftConfig {
    let mut config = bare_aircraft(velocity);
    config.surfaces.push(panel("panel", area, Vector3::zeros(), orientation));
    config
}

pub fn panel(
    name: &str,
    area: f64,
    offset: Vector3<f64>,
    orientation: Vector3<f64>,
) -> SurfaceConfig {
    SurfaceConfig {
        name: name.to_string(),
        area,
        force_multiplier: 1.0,
        clamp_axes: AxisClamp::NONE,
        offset,
        orientation,
        control: None,
    }
}

/// A body with a single centred thruster pointing forward.
pub fn thruster_aircraft(thrust_force: f64, max_vector_angle: f64) -> AircraftConfig {
    let mut config = bare_aircraft(Vector3::zeros());
    config.thrusters.push(ThrusterConfig {
        name: "engine".to_string(),
        offset: Vector3::zeros(),
        orientation: Vector3::zeros(),
        thrust_force,
        max_vector_angle,
        max_opening_angle: 20.0,
        max_emission_rate: 100.0,
    });
    config
}

/// Arcade jet whose actuators jump straight to their targets.
pub fn snapping_jet() -> AircraftConfig {
    let mut config = AircraftConfig::arcade_jet();
    config.controls.smoothing = Smoothing::disabled();
    config
}
