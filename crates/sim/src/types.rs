use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Identity quaternion, `[x, y, z, w]` layout.
pub const IDENTITY_ROTATION: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// World-frame up axis.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Pose and velocity of the rig's root body (the pelvis in the reference
/// morphology). Written by the physics engine, read by the control layer,
/// and teleported back to its cached pose on episode reset.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RootBody {
    pub pos: Vec3,
    pub vel: Vec3,
    pub angular_vel: Vec3,
    /// Orientation quaternion, `[x, y, z, w]`.
    pub orientation: [f32; 4],
}

/// One actuated joint in reduced coordinates.
///
/// `position` and `velocity` are owned by the physics engine; the control
/// layer only writes `drive_target`. `local_rotation` is the joint frame
/// relative to its parent link, restored from the rig's rest cache on reset.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DriveJoint {
    pub position: f32,
    pub velocity: f32,
    pub drive_target: f32,
    pub local_rotation: [f32; 4],
}

impl DriveJoint {
    #[must_use]
    pub const fn at_rest(local_rotation: [f32; 4]) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            drive_target: 0.0,
            local_rotation,
        }
    }
}

/// Parameters shared with the physics engine.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SimParams {
    pub gravity: Vec3,
    pub dt: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            dt: 0.01,
        }
    }
}
