//! Episodic balance environment
//!
//! The episode controller for one humanoid rig. It is a two-state machine:
//! while active it accepts steps, and once the reward shaper signals a
//! fall it parks in a terminated state until the next reset. One step runs
//! the whole fixed-timestep pipeline in order: validate the action, write
//! joint drive targets, let the injected integrator advance the world,
//! encode the observation, shape the reward, and record the balance metric
//! to the statistics sink.

use crate::env::{Env, EnvError, Transition};
use crate::observation;
use crate::recorder::StatsSink;
use crate::reward::{RewardParams, RewardShaper};
use sim::{Integrator, World};

/// Statistics key the balance metric is recorded under every step.
pub const UPRIGHT_STAT: &str = "agent/upright";

/// What to do with action components outside the nominal [-1, 1] range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionLimit {
    /// Hand them to the actuator unmodified and let it enforce its own
    /// limits.
    PassThrough,
    /// Clamp to [-1, 1] before scaling.
    Clamp,
}

#[derive(Clone, Copy, Debug)]
pub struct ControlParams {
    /// Scale from a policy action component to a joint drive target.
    pub action_strength: f32,
    pub action_limit: ActionLimit,
}

impl Default for ControlParams {
    fn default() -> Self {
        Self {
            action_strength: 10.0,
            action_limit: ActionLimit::PassThrough,
        }
    }
}

/// Episodic environment teaching a humanoid to stand upright.
pub struct BalanceEnv<I> {
    world: World,
    integrator: I,
    control: ControlParams,
    shaper: RewardShaper,
    sink: Box<dyn StatsSink>,
    steps: u32,
    active: bool,
    // Monitoring state for display surfaces; not part of the learner
    // contract.
    last_actions: Vec<f32>,
    last_reward: f32,
    last_balance: f32,
    last_delta: f32,
    cumulative_reward: f32,
}

impl<I: Integrator> BalanceEnv<I> {
    pub fn new(
        world: World,
        integrator: I,
        control: ControlParams,
        reward: RewardParams,
        sink: Box<dyn StatsSink>,
    ) -> Self {
        if reward.fall_threshold >= reward.punish_threshold {
            tracing::warn!(
                fall = reward.fall_threshold,
                punish = reward.punish_threshold,
                "fall threshold at or above punish threshold; episodes will end without a penalty phase"
            );
        }
        Self {
            world,
            integrator,
            control,
            shaper: RewardShaper::new(reward),
            sink,
            steps: 0,
            active: true,
            last_actions: Vec::new(),
            last_reward: 0.0,
            last_balance: 1.0,
            last_delta: 0.0,
            cumulative_reward: 0.0,
        }
    }

    fn apply_action(&mut self, action: &[f32]) {
        let strength = self.control.action_strength;
        let limit = self.control.action_limit;
        for (joint, &a) in self.world.humanoid.joints.iter_mut().zip(action) {
            let a = match limit {
                ActionLimit::PassThrough => a,
                ActionLimit::Clamp => a.clamp(-1.0, 1.0),
            };
            joint.drive_target = a * strength;
        }
    }

    // --- Read-only accessors for display surfaces ---

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Steps taken in the current episode.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// False once the episode has terminated, until the next reset.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Action vector most recently applied to the joints.
    #[must_use]
    pub fn last_actions(&self) -> &[f32] {
        &self.last_actions
    }

    /// Reward emitted by the most recent step.
    #[must_use]
    pub fn last_reward(&self) -> f32 {
        self.last_reward
    }

    /// Balance metric after the most recent step.
    #[must_use]
    pub fn balance(&self) -> f32 {
        self.last_balance
    }

    /// Step-to-step change of the balance metric.
    #[must_use]
    pub fn balance_delta(&self) -> f32 {
        self.last_delta
    }

    /// Reward accumulated over the current episode.
    #[must_use]
    pub fn cumulative_reward(&self) -> f32 {
        self.cumulative_reward
    }
}

impl<I: Integrator> Env for BalanceEnv<I> {
    fn step(&mut self, action: &[f32]) -> Result<Transition, EnvError> {
        if !self.active {
            return Err(EnvError::EpisodeOver);
        }
        if action.len() != self.action_size() {
            return Err(EnvError::ActionSize {
                got: action.len(),
                expected: self.action_size(),
            });
        }

        self.apply_action(action);
        self.integrator.advance(&mut self.world);
        self.steps += 1;

        let obs = observation::encode(&self.world.humanoid);
        let balance = self.world.humanoid.upright();
        let signal = self.shaper.assess(balance);
        self.sink.add(UPRIGHT_STAT, balance);

        self.last_actions.clear();
        self.last_actions.extend_from_slice(action);
        self.last_reward = signal.reward;
        self.last_balance = signal.balance;
        self.last_delta = signal.delta;
        self.cumulative_reward += signal.reward;

        if signal.terminal {
            self.active = false;
        }
        Ok(Transition {
            obs,
            reward: signal.reward,
            done: signal.terminal,
        })
    }

    fn reset(&mut self) -> Vec<f32> {
        self.world.humanoid.reset();
        self.shaper.reset();
        self.steps = 0;
        self.active = true;
        self.last_actions.clear();
        self.last_reward = 0.0;
        self.last_balance = 1.0;
        self.last_delta = 0.0;
        self.cumulative_reward = 0.0;
        observation::encode(&self.world.humanoid)
    }

    fn obs_size(&self) -> usize {
        observation::obs_len(self.world.humanoid.joint_count())
    }

    fn action_size(&self) -> usize {
        self.world.humanoid.joint_count()
    }
}
