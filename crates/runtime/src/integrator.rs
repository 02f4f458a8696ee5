//! Toy stand-in dynamics for the demo loop.
//!
//! This is NOT a physics solver. The real engine lives on the other side
//! of the [`Integrator`] boundary; this module exists so the demo binary
//! and the loop tests can run whole episodes without it. The model is an
//! inverted pendulum: gravity accelerates any existing lean, a constant
//! nudge torque breaks the perfect-upright equilibrium, and positive net
//! joint effort rights the body, so corrective actions genuinely matter.

use sim::{transform, Integrator, Vec3, World};

pub struct DemoIntegrator {
    /// First-order lag gain pulling joint positions toward drive targets.
    drive_gain: f32,
    /// Effective pendulum length of the root above the support.
    pendulum_length: f32,
    /// Angular velocity damping.
    damping: f32,
    /// Righting torque per unit of mean joint effort.
    correction_gain: f32,
    /// Constant disturbance torque about +X, so an uncontrolled rig tips.
    nudge: f32,
}

impl Default for DemoIntegrator {
    fn default() -> Self {
        Self {
            drive_gain: 8.0,
            pendulum_length: 0.8,
            damping: 0.5,
            correction_gain: 30.0,
            nudge: 0.4,
        }
    }
}

impl Integrator for DemoIntegrator {
    fn advance(&mut self, world: &mut World) {
        let dt = world.params.dt;
        let g = -world.params.gravity.y;
        let rig = &mut world.humanoid;

        let mut effort = 0.0;
        for joint in &mut rig.joints {
            let error = joint.drive_target - joint.position;
            joint.velocity = error * self.drive_gain;
            joint.position += joint.velocity * dt;
            effort += joint.position;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            effort /= rig.joints.len() as f32;
        }

        // Lean direction and magnitude: |up x world_up| = sin(lean angle).
        let up = transform::up_vector(rig.root.orientation);
        let lean = Vec3::UP.cross(up);
        let mut accel =
            lean * (g / self.pendulum_length) - lean * (self.correction_gain * effort);
        accel += Vec3::new(self.nudge, 0.0, 0.0);
        accel -= rig.root.angular_vel * self.damping;

        rig.root.angular_vel += accel * dt;
        rig.root.orientation =
            transform::integrate_orientation(rig.root.orientation, rig.root.angular_vel, dt);
    }
}
