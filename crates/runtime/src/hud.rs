//! Periodic status line for the training loop.
//!
//! Read-only view over the environment's monitoring accessors; nothing
//! here feeds back into the control loop. Episode boundaries are detected
//! the same way an external overlay would have to: the per-episode step
//! counter jumping backwards means a reset happened.

use agent::{BalanceEnv, StatsSink};
use sim::Integrator;

/// Balance deltas smaller than this count as holding steady.
const STABILITY_THRESHOLD: f32 = 1e-4;

pub struct Hud {
    every: u64,
    episodes: u32,
    prev_steps: u32,
}

impl Hud {
    #[must_use]
    pub fn new(every: u64) -> Self {
        Self {
            every,
            episodes: 1,
            prev_steps: 0,
        }
    }

    #[must_use]
    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    /// Track episode turnover and emit a status line every `every` ticks.
    pub fn observe<I: Integrator>(&mut self, env: &BalanceEnv<I>, tick: u64) {
        if env.steps() < self.prev_steps {
            self.episodes += 1;
        }
        self.prev_steps = env.steps();

        if self.every == 0 || tick % self.every != 0 {
            return;
        }
        let delta = env.balance_delta();
        let status = if delta > STABILITY_THRESHOLD {
            "recovering"
        } else if delta < -STABILITY_THRESHOLD {
            "deteriorating"
        } else {
            "steady"
        };
        let actions = env
            .last_actions()
            .iter()
            .map(|a| format!("{a:.2}"))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(
            episode = self.episodes,
            steps = env.steps(),
            balance = format!("{:.3}", env.balance()),
            delta = format!("{delta:.4}"),
            status,
            episode_reward = format!("{:.2}", env.cumulative_reward()),
            step_reward = format!("{:.4}", env.last_reward()),
            gravity = format!("{:.2}", env.world().gravity_magnitude()),
            actions = format!("[{actions}]"),
            "balance status"
        );
    }
}

/// Statistics sink that forwards samples to the tracing subscriber.
#[derive(Default)]
pub struct TraceSink;

impl StatsSink for TraceSink {
    fn add(&mut self, key: &str, value: f32) {
        tracing::trace!(key, value, "stat");
    }
}
