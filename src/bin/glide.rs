use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::{env, time::Duration};

use arcade_flight::{
    components::{FlightTelemetry, PlayerController},
    config::{AircraftConfig, ConfigError, PhysicsConfig},
    plugins::{AircraftPlugin, ControlSet, EnvironmentPlugin, FlightPlugin, PhysicsPlugin},
    resources::{EnvironmentConfig, PilotInput},
};

/// Seconds of simulated flight before exiting
const FLIGHT_TIME: f64 = 10.0;

/// Fly a plane headless with a scripted pilot and log its telemetry.
///
/// Usage: `glide [aircraft.yaml]`
fn main() -> Result<(), ConfigError> {
    let config = match env::args().nth(1) {
        Some(path) => AircraftConfig::from_file(path)?,
        None => AircraftConfig::arcade_jet(),
    };
    let physics = PhysicsConfig::default();

    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                physics.timestep,
            ))),
            LogPlugin::default(),
        ))
        .add_plugins((
            PhysicsPlugin::with_config(physics),
            EnvironmentPlugin::with_config(EnvironmentConfig::with_constant_wind(5.0, 90.0)),
            FlightPlugin::default(),
            AircraftPlugin::new(config),
        ))
        .add_systems(Update, scripted_pilot.before(ControlSet::Input))
        .add_systems(Update, report.after(ControlSet::Telemetry))
        .run();

    Ok(())
}

/// Full throttle, then a gentle right roll, then hands off.
fn scripted_pilot(time: Res<Time>, mut input: ResMut<PilotInput>) {
    let t = time.elapsed_secs_f64();
    input.set_throttle(1.0);
    input.apply_roll(if (2.0..4.0).contains(&t) { -0.5 } else { 0.0 });
}

fn report(
    time: Res<Time>,
    query: Query<&FlightTelemetry, With<PlayerController>>,
    mut last_report: Local<f64>,
    mut exit: EventWriter<AppExit>,
) {
    let t = time.elapsed_secs_f64();
    if t - *last_report >= 1.0 {
        *last_report = t;
        for telemetry in query.iter() {
            info!(
                "t={:.1}s speed={:.2} height={:.2} bank={:.1} tilt={:.2}",
                t,
                telemetry.speed_ratio,
                telemetry.height_ratio,
                telemetry.bank_angle,
                telemetry.tilt_ratio
            );
        }
    }
    if t >= FLIGHT_TIME {
        exit.send(AppExit::Success);
    }
}
