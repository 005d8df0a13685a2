use bevy::prelude::*;

use crate::components::{
    AileronConfig, ControlSurfaces, Deflections, PlayerController, RudderConfig, Smoothing,
    SpatialComponent, SurfacePair,
};
use crate::resources::PilotInput;
use crate::utils::{
    lerp_angle_deg, signed_degrees, wrap_degrees, AUTO_LEVEL_DEAD_ZONE_DEG,
    AUTO_LEVEL_DEFLECTION_FRACTION, INVERTED_FLIGHT_PREFERENCE_DEG,
};

/// Whether a bank angle in degrees is within the auto-level dead zone of
/// upright or inverted flight.
pub fn is_wings_level(bank_angle: f64) -> bool {
    (wrap_degrees(bank_angle) + AUTO_LEVEL_DEAD_ZONE_DEG).rem_euclid(180.0)
        < 2.0 * AUTO_LEVEL_DEAD_ZONE_DEG
}

/// Right aileron target in degrees. The left aileron mirrors it.
pub fn aileron_target(config: &AileronConfig, input: &PilotInput, bank_angle: f64) -> f64 {
    let released = input.roll() == 0.0 && input.yaw() == 0.0;
    if !(released && config.auto_level) || is_wings_level(bank_angle) {
        return config.max_deflection * input.roll();
    }

    // Roll right out of the first and third quadrants, biased towards rolling
    // upright when inverted
    let z = wrap_degrees(bank_angle);
    let turn_right = (z > 0.0 && z < 90.0 - INVERTED_FLIGHT_PREFERENCE_DEG)
        || (z > 180.0 && z < 270.0 + INVERTED_FLIGHT_PREFERENCE_DEG);
    let sign = if turn_right { -1.0 } else { 1.0 };
    sign * config.max_deflection * AUTO_LEVEL_DEFLECTION_FRACTION
}

/// Rudder targets. The rudder on the outside of the turn uses the outer ratio.
pub fn rudder_targets(config: &RudderConfig, yaw: f64) -> SurfacePair {
    let left_multiplier = if yaw > 0.0 {
        config.outer_rudder_ratio
    } else {
        1.0
    };
    let right_multiplier = if yaw < 0.0 {
        config.outer_rudder_ratio
    } else {
        1.0
    };
    SurfacePair::new(
        -config.max_deflection * yaw * left_multiplier,
        -config.max_deflection * yaw * right_multiplier,
    )
}

/// Deflections the surfaces should move towards for the given input.
pub fn target_deflections(
    config: &ControlSurfaces,
    input: &PilotInput,
    bank_angle: f64,
) -> Deflections {
    let flap = -config.flaps.max_deflection * input.pitch()
        - config.flaps.brake_extra_deflection * input.brake();
    let aileron = aileron_target(&config.ailerons, input, bank_angle);
    let elevator = config.elevators.max_deflection * input.pitch();
    let turn = config.elevators.turn_extra_deflection * input.yaw();

    Deflections {
        flaps: SurfacePair::symmetric(flap),
        ailerons: SurfacePair::new(-aileron, aileron),
        elevators: SurfacePair::new(elevator + turn, elevator - turn),
        rudders: rudder_targets(&config.rudders, input.yaw()),
    }
}

/// Move `current` towards `target` along the shortest arc.
///
/// Flaps follow their left surface and ailerons their right surface, so each
/// pair stays symmetric or mirrored.
pub fn smooth_deflections(
    current: &Deflections,
    target: &Deflections,
    smoothing: &Smoothing,
    dt: f64,
) -> Deflections {
    if smoothing.snaps() {
        return *target;
    }

    let factor = dt * smoothing.rate;
    let step = |from: f64, to: f64| signed_degrees(lerp_angle_deg(from, to, factor));

    let flap = step(current.flaps.left, target.flaps.left);
    let aileron = step(current.ailerons.right, target.ailerons.right);

    Deflections {
        flaps: SurfacePair::symmetric(flap),
        ailerons: SurfacePair::new(-aileron, aileron),
        elevators: SurfacePair::new(
            step(current.elevators.left, target.elevators.left),
            step(current.elevators.right, target.elevators.right),
        ),
        rudders: SurfacePair::new(
            step(current.rudders.left, target.rudders.left),
            step(current.rudders.right, target.rudders.right),
        ),
    }
}

/// Drive the control surfaces of piloted bodies from [`PilotInput`].
///
/// While input is locked the stick is treated as centred.
pub fn control_surface_system(
    input: Res<PilotInput>,
    time: Res<Time>,
    mut query: Query<(
        &ControlSurfaces,
        &mut Deflections,
        &SpatialComponent,
        &PlayerController,
    )>,
) {
    let dt = time.delta_secs_f64();
    let neutral = PilotInput::default();

    for (config, mut deflections, spatial, controller) in query.iter_mut() {
        if !controller.active {
            continue;
        }
        let input = if controller.is_locked() {
            &neutral
        } else {
            &*input
        };

        let target = target_deflections(config, input, spatial.bank_angle_deg());
        *deflections = smooth_deflections(&deflections, &target, &config.smoothing, dt);
    }
}
