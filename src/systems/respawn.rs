use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AerodynamicBody, AerodynamicSurface, Attachment, Deflections, PlayerController,
    SpatialComponent, Thruster,
};
use crate::config::RespawnConfig;
use crate::plugins::{CrashEvent, ImpactEvent, RespawnEvent};
use crate::resources::PilotInput;

/// Turn hard impacts of piloted bodies into crashes.
pub fn crash_detection_system(
    mut impacts: EventReader<ImpactEvent>,
    mut crashes: EventWriter<CrashEvent>,
    config: Res<RespawnConfig>,
    controllers: Query<&PlayerController>,
) {
    for impact in impacts.read() {
        if impact.impulse < config.crash_impulse || !controllers.contains(impact.body) {
            continue;
        }
        info!(
            "Body {:?} crashed with impulse {:.2}",
            impact.body, impact.impulse
        );
        crashes.send(CrashEvent {
            body: impact.body,
            position: impact.position,
        });
    }
}

/// Reset a body above the crash point, wings level and flying at respawn speed.
pub fn respawn_body(
    body: &AerodynamicBody,
    spatial: &mut SpatialComponent,
    crash_position: &Vector3<f64>,
    config: &RespawnConfig,
) {
    spatial.position = crash_position + Vector3::new(0.0, config.altitude_offset, 0.0);
    spatial.attitude = spatial.level_attitude();
    spatial.angular_velocity = Vector3::zeros();
    let velocity = spatial.forward() * config.respawn_speed;
    body.set_velocity(spatial, velocity);
}

pub fn respawn_system(
    mut crashes: EventReader<CrashEvent>,
    mut respawns: EventWriter<RespawnEvent>,
    config: Res<RespawnConfig>,
    mut input: ResMut<PilotInput>,
    mut bodies: Query<(
        &AerodynamicBody,
        &mut SpatialComponent,
        Option<&mut Deflections>,
        &mut PlayerController,
    )>,
    mut parts: Query<(
        &Attachment,
        Option<&mut AerodynamicSurface>,
        Option<&mut Thruster>,
    )>,
) {
    for crash in crashes.read() {
        let Ok((body, mut spatial, deflections, mut controller)) = bodies.get_mut(crash.body)
        else {
            warn!("Crash reported for unknown body {:?}", crash.body);
            continue;
        };

        respawn_body(body, &mut spatial, &crash.position, &config);
        if let Some(mut deflections) = deflections {
            deflections.reset();
        }
        controller.lock_for(config.lock_duration);
        input.set_throttle(1.0);

        for (attachment, surface, thruster) in parts.iter_mut() {
            if attachment.body != Some(crash.body) {
                continue;
            }
            // The teleport must not count as displacement
            if let Some(mut surface) = surface {
                surface.reset_history();
            }
            if let Some(mut thruster) = thruster {
                thruster.set_power(1.0);
            }
        }

        info!("Respawned {:?} at {:?}", crash.body, spatial.position);
        respawns.send(RespawnEvent {
            body: crash.body,
            position: spatial.position,
        });
    }
}

/// Count down input locks. When one expires the pilot takes over with the
/// throttle closed.
pub fn input_lock_system(
    time: Res<Time>,
    mut input: ResMut<PilotInput>,
    mut controllers: Query<(Entity, &mut PlayerController)>,
    mut thrusters: Query<(&mut Thruster, &Attachment)>,
) {
    let dt = time.delta_secs_f64();

    for (entity, mut controller) in controllers.iter_mut() {
        if !controller.tick_lock(dt) {
            continue;
        }
        debug!("Input unlocked for {:?}", entity);
        input.set_throttle(0.0);
        for (mut thruster, attachment) in thrusters.iter_mut() {
            if attachment.body == Some(entity) {
                thruster.set_power(0.0);
            }
        }
    }
}
