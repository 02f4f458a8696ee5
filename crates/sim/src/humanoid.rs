//! Humanoid rig entity
//!
//! Bundles the root body with the fixed ordered joint sequence and caches
//! the initial pose captured at construction time. The joint order is
//! significant: the control layer addresses joints by position in this
//! sequence, so it is set once and never resized during a training run.

use crate::transform;
use crate::types::{DriveJoint, RootBody, Vec3};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("rig has no actuated joints")]
    NoJoints,
}

/// An articulated humanoid with a free root body and N actuated joints.
#[derive(Debug)]
pub struct Humanoid {
    pub root: RootBody,
    pub joints: Vec<DriveJoint>,
    /// Root position captured at construction, restored on reset.
    initial_position: Vec3,
    /// Root orientation captured at construction, restored on reset.
    initial_orientation: [f32; 4],
    /// Per-joint rest rotation captured at construction, indexed by joint
    /// position in the configured order.
    rest_rotations: Vec<[f32; 4]>,
}

impl Humanoid {
    /// Build a rig standing at `root_pos` with the given joint rest
    /// rotations, one per actuated joint in actuation order.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NoJoints`] if `rest_rotations` is empty. A rig
    /// with a missing joint sequence would silently train a no-op policy,
    /// so construction refuses it outright.
    pub fn new(
        root_pos: Vec3,
        root_orientation: [f32; 4],
        rest_rotations: Vec<[f32; 4]>,
    ) -> Result<Self, SimError> {
        if rest_rotations.is_empty() {
            return Err(SimError::NoJoints);
        }
        let joints = rest_rotations.iter().map(|&r| DriveJoint::at_rest(r)).collect();
        Ok(Self {
            root: RootBody {
                pos: root_pos,
                vel: Vec3::ZERO,
                angular_vel: Vec3::ZERO,
                orientation: root_orientation,
            },
            joints,
            initial_position: root_pos,
            initial_orientation: root_orientation,
            rest_rotations,
        })
    }

    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Cosine of the lean angle between the root's up axis and world up.
    /// 1.0 is perfectly upright, 0.0 is horizontal.
    #[must_use]
    pub fn upright(&self) -> f32 {
        transform::up_vector(self.root.orientation).dot(Vec3::UP)
    }

    /// Teleport the rig back to its cached initial pose.
    ///
    /// Zeroes root linear and angular velocity, restores every joint's rest
    /// rotation, and clears joint positions, velocities, and drive targets.
    /// Calling this repeatedly always yields the same physical state.
    pub fn reset(&mut self) {
        self.root.pos = self.initial_position;
        self.root.orientation = self.initial_orientation;
        self.root.vel = Vec3::ZERO;
        self.root.angular_vel = Vec3::ZERO;
        for (joint, &rest) in self.joints.iter_mut().zip(&self.rest_rotations) {
            joint.local_rotation = rest;
            joint.position = 0.0;
            joint.velocity = 0.0;
            joint.drive_target = 0.0;
        }
    }
}
