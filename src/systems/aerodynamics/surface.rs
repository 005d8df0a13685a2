use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AerodynamicBody, AerodynamicSurface, Attachment, ForceCategory, ForceMode, PhysicsComponent,
    SpatialComponent, WorldPose,
};
use crate::resources::Meteorology;
use crate::utils::MIN_DISPLACEMENT;

/// Normal force on a flat surface that moved by `displacement` during one tick.
///
/// Returns `(incidence, force)`. Incidence is the cosine between `normal` and the
/// air hitting the surface; force is `incidence · area · |actual|²` where
/// `actual` is the displacement relative to the moving air. Both are zero when
/// the surface did not move relative to the air.
pub fn normal_force(
    normal: &Vector3<f64>,
    displacement: &Vector3<f64>,
    wind: &Vector3<f64>,
    dt: f64,
    area: f64,
) -> (f64, f64) {
    let actual = displacement - wind * dt;
    let distance = actual.norm();
    let normal_norm = normal.norm();
    if distance.is_nan() || distance < MIN_DISPLACEMENT || normal_norm < f64::EPSILON {
        return (0.0, 0.0);
    }

    let incidence = (normal.dot(&-actual) / (normal_norm * distance)).clamp(-1.0, 1.0);
    (incidence, incidence * area * distance * distance)
}

/// Push the normal force of every attached surface into its body.
///
/// The wind term spans the fixed clock's period, the same interval the
/// displacement was measured over. A surface without a live body only rolls
/// its position history forward.
pub fn aerodynamic_surface_system(
    mut surfaces: Query<(&mut AerodynamicSurface, &Attachment, &WorldPose)>,
    mut bodies: Query<(&AerodynamicBody, &SpatialComponent, &mut PhysicsComponent)>,
    meteorology: Res<Meteorology>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.timestep().as_secs_f64();

    for (mut surface, attachment, pose) in surfaces.iter_mut() {
        let position = pose.position;
        surface.displacement = surface
            .previous_position
            .map_or_else(Vector3::zeros, |previous| position - previous);

        let Some((body, spatial, mut physics)) =
            attachment.body.and_then(|entity| bodies.get_mut(entity).ok())
        else {
            surface.incidence = 0.0;
            surface.force_magnitude = 0.0;
            surface.previous_position = Some(position);
            continue;
        };

        let normal = pose.forward();
        let (incidence, force) = normal_force(
            &normal,
            &surface.displacement,
            &meteorology.wind_velocity,
            dt,
            surface.area,
        );
        surface.incidence = incidence;
        surface.force_magnitude = force;

        if force != 0.0 {
            let direction =
                spatial.body_to_world(&surface.clamp_axes.apply(&spatial.world_to_body(&normal)));
            body.apply_force_at_point(
                &mut physics,
                direction * (body.default_force * surface.force_multiplier * force),
                position,
                ForceMode::VelocityChange,
                ForceCategory::Aerodynamic,
            );
        }

        surface.previous_position = Some(position);
    }
}
