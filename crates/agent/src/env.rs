use thiserror::Error;

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the
/// core interface an environment must provide. Each call to [`step`]
/// advances the simulation by one action vector and returns the new
/// observation, a reward signal, and whether the episode has terminated.
///
/// Unlike a raw gym binding, `step` is fallible: handing the environment a
/// malformed action is a caller bug that must surface immediately rather
/// than silently corrupt a training run.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action vector.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ActionSize`] when the action length does not
    /// match [`action_size`](Env::action_size), and
    /// [`EnvError::EpisodeOver`] when called after termination without an
    /// intervening [`reset`](Env::reset). In both cases episode state is
    /// left untouched.
    fn step(&mut self, action: &[f32]) -> Result<Transition, EnvError>;

    /// Reset the environment to its starting state and return the initial
    /// observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action vector.
    fn action_size(&self) -> usize;
}

/// One step's worth of output toward the learner.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub obs: Vec<f32>,
    pub reward: f32,
    pub done: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnvError {
    #[error("action vector has length {got}, expected {expected}")]
    ActionSize { got: usize, expected: usize },
    #[error("episode has terminated; call reset before stepping")]
    EpisodeOver,
}
