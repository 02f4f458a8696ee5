#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Balance Control Core
//!
//! The training-facing half of the humanoid balance task: an episodic
//! environment in the classic step/reset mold, built from four pieces that
//! compose inside one fixed-timestep tick.
//!
//! -   [`BalanceEnv`] owns the episode state machine. Each step applies the
//!     incoming action to the joint drives, lets the injected
//!     [`Integrator`](sim::Integrator) advance the world, then encodes an
//!     observation and shapes a reward.
//! -   [`observation`] encodes body and joint state into the fixed-layout
//!     vector consumed by the policy.
//! -   [`RewardShaper`] carries the previous balance metric across steps
//!     and implements the worsening-while-compromised penalty rule and the
//!     terminal override.
//! -   [`GravityCurriculum`] is independent of any episode: it maps the
//!     global training step counter onto a gravity magnitude through an
//!     ordered stage table and writes the world parameter only on change.

pub mod balance;
pub mod curriculum;
pub mod env;
pub mod observation;
pub mod recorder;
pub mod reward;

pub use balance::{ActionLimit, BalanceEnv, ControlParams, UPRIGHT_STAT};
pub use curriculum::{CurriculumStage, GravityCurriculum, DEFAULT_GRAVITY};
pub use env::{Env, EnvError, Transition};
pub use recorder::{MemorySink, NullSink, StatsSink};
pub use reward::{RewardParams, RewardShaper, StepReward};
