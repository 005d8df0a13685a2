use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AerodynamicSurface, Attachment, ControlSurfaceBinding, Deflections, FlightTelemetry,
    PhysicsComponent, PlayerController, SpatialComponent, Thruster, WorldPose,
};
use crate::config::AircraftConfig;
use crate::utils::{axis_rotation_deg, orientation_from_euler_deg};

/// Spawn a body and all of its surfaces and thrusters. Returns the body entity.
pub fn spawn_aircraft(commands: &mut Commands, config: &AircraftConfig) -> Entity {
    let attitude = axis_rotation_deg(&Vector3::y_axis(), config.start.heading);
    let spatial = SpatialComponent::new(
        config.start.position,
        config.start.velocity,
        attitude,
        Vector3::zeros(),
    );

    let mut body = commands.spawn((
        Name::new(config.name.clone()),
        config.body.clone(),
        spatial,
        PhysicsComponent::with_principal_inertia(config.mass, config.inertia),
        config.controls.clone(),
        Deflections::default(),
        FlightTelemetry::default(),
    ));
    if let Some(lift) = &config.assisted_lift {
        body.insert(lift.clone());
    }
    let body = body.id();

    for surface in &config.surfaces {
        let mut part = commands.spawn((
            Name::new(surface.name.clone()),
            AerodynamicSurface::new(surface.area)
                .with_force_multiplier(surface.force_multiplier)
                .with_clamp_axes(surface.clamp_axes),
            Attachment::new(
                body,
                surface.offset,
                orientation_from_euler_deg(&surface.orientation),
            ),
            WorldPose::default(),
        ));
        if let Some(control) = &surface.control {
            part.insert(ControlSurfaceBinding::new(
                control.channel,
                control.side,
                control.hinge_axis,
            ));
        }
    }

    for thruster in &config.thrusters {
        commands.spawn((
            Name::new(thruster.name.clone()),
            Thruster::new(
                thruster.thrust_force,
                thruster.max_vector_angle,
                thruster.max_opening_angle,
            )
            .with_max_emission_rate(thruster.max_emission_rate),
            Attachment::new(
                body,
                thruster.offset,
                orientation_from_euler_deg(&thruster.orientation),
            ),
            WorldPose::default(),
        ));
    }

    info!(
        "Spawned {} with {} surfaces and {} thrusters",
        config.name,
        config.surfaces.len(),
        config.thrusters.len()
    );
    body
}

/// Spawns one piloted aircraft at startup.
pub struct AircraftPlugin {
    config: AircraftConfig,
}

impl Default for AircraftPlugin {
    fn default() -> Self {
        Self::new(AircraftConfig::arcade_jet())
    }
}

impl AircraftPlugin {
    pub fn new(config: AircraftConfig) -> Self {
        Self { config }
    }

    fn setup_aircraft(mut commands: Commands, config: AircraftConfig) {
        let body = spawn_aircraft(&mut commands, &config);
        commands.entity(body).insert(PlayerController::new());
    }
}

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        app.add_systems(Startup, move |commands: Commands| {
            Self::setup_aircraft(commands, config.clone())
        });
    }
}
