//! Orientation helpers for body state
//!
//! Orientations are stored as raw `[x, y, z, w]` quaternion arrays so the
//! state structs stay `Pod`; this module wraps the glam math needed to turn
//! them into world-frame direction vectors and to integrate them over time.

use crate::types::Vec3;
use glam::{Quat, Vec3 as GlamVec3};

fn to_quat(orientation: [f32; 4]) -> Quat {
    Quat::from_xyzw(orientation[0], orientation[1], orientation[2], orientation[3])
}

/// Rotate a vector by an orientation quaternion.
#[must_use]
pub fn rotate(orientation: [f32; 4], v: Vec3) -> Vec3 {
    let out = to_quat(orientation) * GlamVec3::new(v.x, v.y, v.z);
    Vec3::new(out.x, out.y, out.z)
}

/// World-frame up axis of a body with the given orientation.
#[must_use]
pub fn up_vector(orientation: [f32; 4]) -> Vec3 {
    rotate(orientation, Vec3::new(0.0, 1.0, 0.0))
}

/// World-frame forward axis of a body with the given orientation.
#[must_use]
pub fn forward_vector(orientation: [f32; 4]) -> Vec3 {
    rotate(orientation, Vec3::new(0.0, 0.0, 1.0))
}

/// Integrate an orientation by an angular velocity over `dt`.
///
/// Uses the axis-angle exponential of `angular_vel * dt`, which stays
/// normalized for any step size.
#[must_use]
pub fn integrate_orientation(orientation: [f32; 4], angular_vel: Vec3, dt: f32) -> [f32; 4] {
    let omega = GlamVec3::new(angular_vel.x, angular_vel.y, angular_vel.z);
    let angle = omega.length() * dt;
    if angle < 1e-9 {
        return orientation;
    }
    let delta = Quat::from_axis_angle(omega.normalize(), angle);
    let q = (delta * to_quat(orientation)).normalize();
    [q.x, q.y, q.z, q.w]
}
