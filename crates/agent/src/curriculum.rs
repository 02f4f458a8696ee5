//! Gravity curriculum scheduling
//!
//! Training starts easy and gets harder: the scheduler maps the global
//! training step counter onto a gravity magnitude through an ordered table
//! of activation stages. It has no notion of episodes. The counter it
//! reads is owned by the training driver and only ever grows, so the
//! selected stage is monotone over a run and survives episode resets.

use sim::World;

/// Gravity applied when no stage has been reached yet.
pub const DEFAULT_GRAVITY: f32 = 9.81;

/// One difficulty stage: from `activate_at` global steps onward, gravity
/// is `gravity`, until a later stage takes over.
#[derive(Clone, Debug)]
pub struct CurriculumStage {
    /// Label used in the stage-change log line. May be empty.
    pub name: String,
    pub activate_at: u64,
    pub gravity: f32,
}

pub struct GravityCurriculum {
    stages: Vec<CurriculumStage>,
    applied: f32,
}

impl GravityCurriculum {
    /// Build a scheduler from stages in any order.
    ///
    /// The table is sorted by activation threshold here rather than
    /// trusting the caller; a misordered table would otherwise make the
    /// early-exit scan below pick stale stages. An empty table is valid
    /// and simply pins gravity to [`DEFAULT_GRAVITY`].
    #[must_use]
    pub fn new(mut stages: Vec<CurriculumStage>) -> Self {
        stages.sort_by_key(|s| s.activate_at);
        Self {
            stages,
            applied: DEFAULT_GRAVITY,
        }
    }

    /// Gravity magnitude the curriculum prescribes at `progress` total
    /// steps: the last stage whose threshold has been reached.
    #[must_use]
    pub fn target_for(&self, progress: u64) -> f32 {
        let mut value = DEFAULT_GRAVITY;
        for stage in &self.stages {
            if progress >= stage.activate_at {
                value = stage.gravity;
            } else {
                // Sorted ascending, nothing further can be active.
                break;
            }
        }
        value
    }

    /// Gravity magnitude most recently applied to a world.
    #[must_use]
    pub fn applied(&self) -> f32 {
        self.applied
    }

    /// Re-evaluate the table and write the world's gravity if the
    /// prescribed value changed. Returns whether a write happened, so a
    /// second call with the same `progress` is always a no-op.
    pub fn update(&mut self, world: &mut World, progress: u64) -> bool {
        let target = self.target_for(progress);
        if (target - self.applied).abs() < f32::EPSILON {
            return false;
        }
        let name = self
            .stages
            .iter()
            .rev()
            .find(|s| progress >= s.activate_at)
            .map_or("", |s| s.name.as_str());
        tracing::info!(gravity = target, progress, stage = name, "gravity curriculum advanced");
        self.applied = target;
        world.set_gravity(target);
        true
    }
}
