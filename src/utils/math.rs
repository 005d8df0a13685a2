use nalgebra::{Unit, UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // Tiny negative angles round up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest difference `to - from` in degrees, in `(-180, 180]`.
pub fn delta_angle_deg(from: f64, to: f64) -> f64 {
    let delta = wrap_degrees(to - from);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Wrap an angle in degrees into `(-180, 180]`.
#[inline]
pub fn signed_degrees(angle: f64) -> f64 {
    delta_angle_deg(0.0, angle)
}

/// Interpolates between two angles in degrees along the shortest arc.
///
/// `factor` is clamped to `[0, 1]`, so a factor of one always lands on `end`.
pub fn lerp_angle_deg(start: f64, end: f64, factor: f64) -> f64 {
    start + delta_angle_deg(start, end) * factor.clamp(0.0, 1.0)
}

/// Clamp a value, mapping NaN/inf to zero first.
#[inline]
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        0.0
    }
}

/// Rotation of `angle_deg` degrees about `axis`.
pub fn axis_rotation_deg(axis: &Unit<Vector3<f64>>, angle_deg: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(axis, deg_to_rad(angle_deg))
}

/// Orientation from Euler angles in degrees, applied roll (Z) then pitch (X) then yaw (Y).
pub fn orientation_from_euler_deg(euler: &Vector3<f64>) -> UnitQuaternion<f64> {
    let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), deg_to_rad(euler.x));
    let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), deg_to_rad(euler.y));
    let roll = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), deg_to_rad(euler.z));
    yaw * pitch * roll
}
