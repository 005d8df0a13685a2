use bevy::prelude::*;

use crate::config::{RespawnConfig, TelemetryConfig};
use crate::plugins::{CrashEvent, ImpactEvent, RespawnEvent};
use crate::resources::{Meteorology, PilotInput};
use crate::systems::{
    aerodynamic_surface_system, assisted_lift_system, attachment_pose_system,
    control_surface_system, crash_detection_system, input_lock_system, respawn_system,
    telemetry_system, thruster_command_system, thruster_force_system,
};

/// Fixed-tick flight stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    /// Clear the previous tick's forces
    Prepare,
    /// Propagate attached part poses from their bodies
    Pose,
    Aerodynamics,
    Propulsion,
    /// Sum forces into net force and moment
    Forces,
    Integration,
}

impl FlightSet {
    pub fn chain() -> impl IntoSystemSetConfigs {
        (
            Self::Prepare,
            Self::Pose,
            Self::Aerodynamics,
            Self::Propulsion,
            Self::Forces,
            Self::Integration,
        )
            .chain()
    }
}

/// Per-frame pilot stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum ControlSet {
    /// Input locks and crash handling
    Input,
    /// Control surface and thruster commands
    Actuation,
    Telemetry,
}

/// Aerodynamic surfaces, control actuators, thrusters and the crash hook.
///
/// Pair with [`PhysicsPlugin`](crate::plugins::PhysicsPlugin) or another
/// integrator reading `PhysicsComponent`. Surface forces span one period of
/// the app's `Time<Fixed>` clock, whatever rate the host gives it.
#[derive(Default)]
pub struct FlightPlugin {
    pub respawn: RespawnConfig,
    pub telemetry: TelemetryConfig,
}

impl FlightPlugin {
    pub fn with_respawn(mut self, respawn: RespawnConfig) -> Self {
        self.respawn = respawn;
        self
    }

    pub fn with_telemetry(mut self, telemetry: TelemetryConfig) -> Self {
        self.telemetry = telemetry;
        self
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Meteorology>()
            .init_resource::<PilotInput>()
            .insert_resource(self.respawn.clone())
            .insert_resource(self.telemetry.clone());

        app.add_event::<ImpactEvent>()
            .add_event::<CrashEvent>()
            .add_event::<RespawnEvent>();

        app.configure_sets(FixedUpdate, FlightSet::chain())
            .configure_sets(
                Update,
                (ControlSet::Input, ControlSet::Actuation, ControlSet::Telemetry).chain(),
            );

        app.add_systems(
            FixedUpdate,
            (
                attachment_pose_system.in_set(FlightSet::Pose),
                (aerodynamic_surface_system, assisted_lift_system)
                    .chain()
                    .in_set(FlightSet::Aerodynamics),
                thruster_force_system.in_set(FlightSet::Propulsion),
            ),
        )
        .add_systems(
            Update,
            (
                (input_lock_system, crash_detection_system, respawn_system)
                    .chain()
                    .in_set(ControlSet::Input),
                (control_surface_system, thruster_command_system).in_set(ControlSet::Actuation),
                telemetry_system.in_set(ControlSet::Telemetry),
            ),
        );
    }
}
