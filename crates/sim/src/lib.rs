#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Articulated Body State
//!
//! State containers for a single controlled humanoid: the root body pose,
//! the ordered sequence of actuated joints, and the shared simulation
//! parameters (gravity, timestep).
//!
//! This crate deliberately contains no dynamics. Advancing the state in
//! time is the job of an external physics engine plugged in behind the
//! [`Integrator`] trait; everything here is the data that engine reads and
//! writes, plus the reset protocol that restores a rig to its cached
//! initial pose between training episodes.
//!
//! ## Key Components
//!
//! -   **State types:** [`RootBody`] and [`DriveJoint`] in the [`types`]
//!     module hold the pose, velocities, and actuation targets the control
//!     layer operates on.
//! -   **Rig:** the [`Humanoid`] entity in the [`humanoid`] module owns the
//!     joint sequence and the initial-pose cache used by episode resets.
//! -   **World:** the [`World`] container in the [`world`] module bundles
//!     one rig with the [`SimParams`] shared with the physics engine.

pub mod humanoid;
pub mod integrator;
pub mod transform;
pub mod types;
pub mod world;

pub use humanoid::{Humanoid, SimError};
pub use integrator::Integrator;
pub use types::{DriveJoint, RootBody, SimParams, Vec3, IDENTITY_ROTATION};
pub use world::World;
