use bevy::prelude::*;

use crate::components::{
    AerodynamicBody, Attachment, ForceCategory, ForceMode, PhysicsComponent, PlayerController,
    Thruster, WorldPose,
};
use crate::resources::PilotInput;

/// Feed throttle and pitch into the thrusters of piloted bodies.
pub fn thruster_command_system(
    input: Res<PilotInput>,
    controllers: Query<&PlayerController>,
    mut thrusters: Query<(&mut Thruster, &Attachment)>,
) {
    for (mut thruster, attachment) in thrusters.iter_mut() {
        let accepts_input = attachment
            .body
            .and_then(|body| controllers.get(body).ok())
            .is_some_and(PlayerController::accepts_input);
        if !accepts_input {
            continue;
        }

        thruster.set_power(input.throttle());
        thruster.set_angle(-input.pitch());
    }
}

/// Push every thruster along its nozzle into its body.
pub fn thruster_force_system(
    thrusters: Query<(&Thruster, &Attachment, &WorldPose)>,
    mut bodies: Query<(&AerodynamicBody, &mut PhysicsComponent)>,
) {
    for (thruster, attachment, pose) in thrusters.iter() {
        if !thruster.is_emitting() {
            continue;
        }
        let Some((body, mut physics)) = attachment.body.and_then(|e| bodies.get_mut(e).ok())
        else {
            continue;
        };

        body.apply_force_at_point(
            &mut physics,
            thruster.thrust(&pose.forward()),
            pose.position,
            ForceMode::Acceleration,
            ForceCategory::Propulsive,
        );
    }
}
