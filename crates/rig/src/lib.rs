#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! JSON rig descriptions.
//!
//! A rig file names the root body pose, the ordered actuated joint list,
//! and optionally the control gains, reward shaping constants, and gravity
//! curriculum for a training run. The joint order in the file is the
//! order observations and actions are indexed by, so it is part of the
//! training contract, not a cosmetic detail.

use agent::{ActionLimit, ControlParams, CurriculumStage, GravityCurriculum, RewardParams};
use anyhow::Result;
use serde::Deserialize;
use sim::{Humanoid, Vec3, World};
use std::collections::HashSet;

/// Built-in reference morphology: a 13-joint humanoid with a staged
/// gravity ramp.
const REFERENCE_RIG: &str = include_str!("../data/reference.json");

#[derive(Deserialize)]
pub struct RigDef {
    pub root: RootDef,
    pub joints: Vec<JointDef>,
    #[serde(default)]
    pub control: ControlDef,
    #[serde(default)]
    pub reward: RewardDef,
    #[serde(default)]
    pub curriculum: Vec<StageDef>,
}

#[derive(Deserialize)]
pub struct RootDef {
    pub pos: [f32; 3],
    #[serde(default = "identity_rotation")]
    pub rotation: [f32; 4],
}

#[derive(Deserialize)]
pub struct JointDef {
    pub name: String,
    #[serde(default = "identity_rotation")]
    pub rest_rotation: [f32; 4],
}

#[derive(Deserialize)]
pub struct ControlDef {
    #[serde(default = "default_action_strength")]
    pub action_strength: f32,
    #[serde(default)]
    pub clamp_actions: bool,
}

impl Default for ControlDef {
    fn default() -> Self {
        Self {
            action_strength: default_action_strength(),
            clamp_actions: false,
        }
    }
}

#[derive(Deserialize)]
pub struct RewardDef {
    #[serde(default = "default_alive_bonus")]
    pub alive_bonus: f32,
    #[serde(default = "default_fall_penalty")]
    pub fall_penalty: f32,
    #[serde(default = "default_punish_threshold")]
    pub punish_threshold: f32,
    #[serde(default = "default_fall_threshold")]
    pub fall_threshold: f32,
    #[serde(default = "default_terminal_penalty")]
    pub terminal_penalty: f32,
}

impl Default for RewardDef {
    fn default() -> Self {
        Self {
            alive_bonus: default_alive_bonus(),
            fall_penalty: default_fall_penalty(),
            punish_threshold: default_punish_threshold(),
            fall_threshold: default_fall_threshold(),
            terminal_penalty: default_terminal_penalty(),
        }
    }
}

#[derive(Deserialize)]
pub struct StageDef {
    #[serde(default)]
    pub name: String,
    pub activate_at: u64,
    pub gravity: f32,
}

fn identity_rotation() -> [f32; 4] {
    sim::IDENTITY_ROTATION
}

fn default_action_strength() -> f32 {
    10.0
}

fn default_alive_bonus() -> f32 {
    0.005
}

fn default_fall_penalty() -> f32 {
    -0.05
}

fn default_punish_threshold() -> f32 {
    0.95
}

fn default_fall_threshold() -> f32 {
    0.8
}

fn default_terminal_penalty() -> f32 {
    -1.0
}

impl RigDef {
    /// Parse a rig description from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or missing required
    /// fields.
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in reference morphology.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded description is itself invalid.
    pub fn reference() -> Result<Self> {
        Self::from_str(REFERENCE_RIG)
    }

    #[must_use]
    pub fn control_params(&self) -> ControlParams {
        ControlParams {
            action_strength: self.control.action_strength,
            action_limit: if self.control.clamp_actions {
                ActionLimit::Clamp
            } else {
                ActionLimit::PassThrough
            },
        }
    }

    #[must_use]
    pub fn reward_params(&self) -> RewardParams {
        RewardParams {
            alive_bonus: self.reward.alive_bonus,
            fall_penalty: self.reward.fall_penalty,
            punish_threshold: self.reward.punish_threshold,
            fall_threshold: self.reward.fall_threshold,
            terminal_penalty: self.reward.terminal_penalty,
        }
    }

    /// Scheduler over this rig's curriculum table. The scheduler sorts the
    /// stages itself, so file order does not matter.
    #[must_use]
    pub fn curriculum(&self) -> GravityCurriculum {
        let stages = self
            .curriculum
            .iter()
            .map(|s| CurriculumStage {
                name: s.name.clone(),
                activate_at: s.activate_at,
                gravity: s.gravity,
            })
            .collect();
        GravityCurriculum::new(stages)
    }

    /// Build the simulation world this rig describes.
    ///
    /// # Errors
    ///
    /// Fails when the joint list is empty or contains duplicate names.
    /// Both indicate a broken description; training against it would
    /// silently mislearn, so building refuses outright.
    pub fn into_world(self) -> Result<World> {
        let mut seen = HashSet::new();
        for joint in &self.joints {
            if !seen.insert(joint.name.as_str()) {
                anyhow::bail!("duplicate joint name {}", joint.name);
            }
        }
        let rest = self.joints.iter().map(|j| j.rest_rotation).collect();
        let humanoid = Humanoid::new(
            Vec3::new(self.root.pos[0], self.root.pos[1], self.root.pos[2]),
            self.root.rotation,
            rest,
        )?;
        Ok(World::new(humanoid))
    }
}
