//! Observation encoding
//!
//! Pure function of the current rig state, no state retained between
//! calls. Layout, in order: root up vector (3), root forward vector (3),
//! root angular velocity (3), then for each joint in configured order its
//! normalized position and velocity (2 each). The joint segment uses the
//! same index order the action applicator uses, so a policy's output and
//! input channels line up by construction.

use sim::{transform, Humanoid};

/// Scalars contributed by the root body before any joints.
pub const OBS_BASE: usize = 9;

/// Observation vector length for a rig with `joint_count` joints.
#[must_use]
pub const fn obs_len(joint_count: usize) -> usize {
    OBS_BASE + 2 * joint_count
}

/// Encode the rig state into a freshly allocated observation vector.
#[must_use]
pub fn encode(humanoid: &Humanoid) -> Vec<f32> {
    let mut obs = Vec::with_capacity(obs_len(humanoid.joint_count()));
    let up = transform::up_vector(humanoid.root.orientation);
    let forward = transform::forward_vector(humanoid.root.orientation);
    obs.extend_from_slice(&[up.x, up.y, up.z]);
    obs.extend_from_slice(&[forward.x, forward.y, forward.z]);
    let w = humanoid.root.angular_vel;
    obs.extend_from_slice(&[w.x, w.y, w.z]);
    for joint in &humanoid.joints {
        obs.push(joint.position);
        obs.push(joint.velocity);
    }
    obs
}
