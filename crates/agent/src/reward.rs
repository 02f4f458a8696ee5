//! Reward shaping for the balance task
//!
//! The shaper is the one stateful piece of the per-step computation: it
//! remembers the previous step's balance metric so it can tell whether the
//! agent is deteriorating or recovering. The penalty rule is deliberately
//! asymmetric. While the agent is close to upright, noise-level wobble in
//! the metric goes unpunished; the fall penalty fires only once balance has
//! already dropped below the punish threshold AND is still getting worse.
//! Falling past the lower fall threshold ends the episode, replacing the
//! whole step reward with the terminal penalty.

#[derive(Clone, Copy, Debug)]
pub struct RewardParams {
    /// Small constant reward for every survived step.
    pub alive_bonus: f32,
    /// Added when balance is below `punish_threshold` and worsening.
    pub fall_penalty: f32,
    /// Balance level under which worsening starts being penalized.
    pub punish_threshold: f32,
    /// Balance level under which the episode terminates.
    pub fall_threshold: f32,
    /// Replaces the step reward entirely on the terminal step.
    pub terminal_penalty: f32,
}

impl Default for RewardParams {
    fn default() -> Self {
        Self {
            alive_bonus: 0.005,
            fall_penalty: -0.05,
            punish_threshold: 0.95,
            fall_threshold: 0.8,
            terminal_penalty: -1.0,
        }
    }
}

/// Result of assessing one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReward {
    pub reward: f32,
    pub balance: f32,
    /// Step-to-step change in the balance metric.
    pub delta: f32,
    pub terminal: bool,
}

pub struct RewardShaper {
    params: RewardParams,
    previous_balance: f32,
}

impl RewardShaper {
    #[must_use]
    pub fn new(params: RewardParams) -> Self {
        Self {
            params,
            previous_balance: 1.0,
        }
    }

    #[must_use]
    pub fn params(&self) -> &RewardParams {
        &self.params
    }

    #[must_use]
    pub fn previous_balance(&self) -> f32 {
        self.previous_balance
    }

    /// Start a fresh episode: the agent is assumed perfectly upright.
    pub fn reset(&mut self) {
        self.previous_balance = 1.0;
    }

    /// Score the new balance metric against the remembered one.
    ///
    /// The remembered metric is updated unconditionally, whether or not the
    /// penalty fired and whether or not the step turned out terminal.
    pub fn assess(&mut self, balance: f32) -> StepReward {
        let delta = balance - self.previous_balance;
        let mut reward = self.params.alive_bonus;
        if balance < self.params.punish_threshold && delta < 0.0 {
            reward += self.params.fall_penalty;
        }
        self.previous_balance = balance;

        let terminal = balance < self.params.fall_threshold;
        if terminal {
            // Override, not accumulate: the per-step shaping above is
            // discarded for the terminal step.
            reward = self.params.terminal_penalty;
        }
        StepReward {
            reward,
            balance,
            delta,
            terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaper() -> RewardShaper {
        RewardShaper::new(RewardParams::default())
    }

    #[test]
    fn upright_wobble_is_never_penalized() {
        let mut s = shaper();
        // Above the punish threshold with a negative delta: alive bonus only.
        let out = s.assess(0.97);
        assert!((out.reward - 0.005).abs() < 1e-7);
        assert!(out.delta < 0.0);
        assert!(!out.terminal);
    }

    #[test]
    fn worsening_below_threshold_is_penalized() {
        let mut s = shaper();
        s.assess(0.9);
        let out = s.assess(0.85);
        assert!((out.reward - (0.005 - 0.05)).abs() < 1e-7);
        assert!(!out.terminal);
    }

    #[test]
    fn recovering_below_threshold_is_not_penalized() {
        let mut s = shaper();
        s.assess(0.85);
        let out = s.assess(0.9);
        assert!((out.reward - 0.005).abs() < 1e-7);
    }

    #[test]
    fn terminal_reward_is_an_override() {
        let mut s = shaper();
        s.assess(0.82);
        let out = s.assess(0.79);
        assert_eq!(out.reward, -1.0);
        assert!(out.terminal);
    }

    #[test]
    fn previous_balance_updates_even_on_terminal_steps() {
        let mut s = shaper();
        s.assess(0.5);
        assert!((s.previous_balance() - 0.5).abs() < 1e-7);
    }
}
