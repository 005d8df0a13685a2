use bevy::prelude::*;
use nalgebra::UnitQuaternion;

use crate::components::{
    Attachment, ControlSurfaceBinding, Deflections, SpatialComponent, Thruster, WorldPose,
};
use crate::utils::axis_rotation_deg;

/// Orientation of an attached part relative to its body, including the
/// current control deflection and nozzle vectoring.
pub fn local_orientation(
    attachment: &Attachment,
    binding: Option<(&ControlSurfaceBinding, &Deflections)>,
    thruster: Option<&Thruster>,
) -> UnitQuaternion<f64> {
    let mut orientation = attachment.orientation;
    if let Some((binding, deflections)) = binding {
        let angle = deflections.angle(binding.channel, binding.side);
        orientation *= axis_rotation_deg(&binding.hinge_axis, angle);
    }
    if let Some(thruster) = thruster {
        orientation *= thruster.nozzle_rotation();
    }
    orientation
}

/// Refresh the world pose of every attached part from its body.
///
/// Detached parts take their mount as a world pose; parts whose body is gone
/// keep their last pose.
pub fn attachment_pose_system(
    mut parts: Query<(
        &Attachment,
        &mut WorldPose,
        Option<&ControlSurfaceBinding>,
        Option<&Thruster>,
    )>,
    bodies: Query<(&SpatialComponent, Option<&Deflections>)>,
) {
    for (attachment, mut pose, binding, thruster) in parts.iter_mut() {
        let Some(entity) = attachment.body else {
            pose.position = attachment.offset;
            pose.orientation = local_orientation(attachment, None, thruster);
            continue;
        };
        let Ok((spatial, deflections)) = bodies.get(entity) else {
            continue;
        };

        let binding = binding.zip(deflections);
        pose.position = spatial.point_to_world(&attachment.offset);
        pose.orientation = spatial.attitude * local_orientation(attachment, binding, thruster);
    }
}
