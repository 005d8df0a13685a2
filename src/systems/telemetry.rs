use bevy::prelude::*;

use crate::components::{AerodynamicBody, FlightTelemetry, SpatialComponent};
use crate::config::TelemetryConfig;
use crate::resources::{Meteorology, PilotInput};

pub fn telemetry_system(
    meteorology: Res<Meteorology>,
    input: Res<PilotInput>,
    config: Res<TelemetryConfig>,
    mut query: Query<(&AerodynamicBody, &SpatialComponent, &mut FlightTelemetry)>,
) {
    for (body, spatial, mut telemetry) in query.iter_mut() {
        *telemetry = FlightTelemetry {
            speed_ratio: body.speed_ratio(spatial),
            airflow_speed: body.relative_airflow(spatial, &meteorology).norm(),
            dynamic_pressure: body.dynamic_pressure(spatial, &meteorology),
            throttle: input.throttle(),
            tilt_ratio: spatial.tilt_deg() / 90.0,
            height_ratio: if config.height_reference > 0.0 {
                spatial.position.y / config.height_reference
            } else {
                0.0
            },
            bank_angle: spatial.bank_angle_deg(),
        };
    }
}
