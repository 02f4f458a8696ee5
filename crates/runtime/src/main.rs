#![deny(clippy::all, clippy::pedantic)]

mod hud;
mod integrator;

use agent::{BalanceEnv, Env};
use anyhow::Result;
use clap::Parser;
use hud::{Hud, TraceSink};
use integrator::DemoIntegrator;
use rig::RigDef;
use std::fs;
use std::path::PathBuf;

/// Fixed-timestep balance training loop driven by a random policy.
///
/// Stands in for the external policy optimizer: it exercises the full
/// episode cycle (curriculum evaluation, step, reset on termination) so
/// the environment can be watched end to end.
#[derive(Parser)]
struct Cli {
    /// Total simulation ticks to run.
    #[arg(long, default_value_t = 5000)]
    ticks: u64,

    /// Path to a rig description JSON; the built-in reference rig is used
    /// when omitted.
    #[arg(long)]
    rig: Option<PathBuf>,

    /// Seed for the random policy.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Emit a status line every this many ticks.
    #[arg(long, default_value_t = 250)]
    hud_every: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let def = match &cli.rig {
        Some(path) => RigDef::from_str(&fs::read_to_string(path)?)?,
        None => RigDef::reference()?,
    };
    let control = def.control_params();
    let reward = def.reward_params();
    let mut curriculum = def.curriculum();
    let world = def.into_world()?;

    let mut env = BalanceEnv::new(
        world,
        DemoIntegrator::default(),
        control,
        reward,
        Box::new(TraceSink),
    );
    tracing::info!(
        joints = env.action_size(),
        obs = env.obs_size(),
        ticks = cli.ticks,
        "starting balance loop"
    );

    fastrand::seed(cli.seed);
    let mut hud = Hud::new(cli.hud_every);
    let mut action = vec![0.0_f32; env.action_size()];
    let mut global_steps: u64 = 0;

    for tick in 0..cli.ticks {
        curriculum.update(env.world_mut(), global_steps);

        for a in &mut action {
            *a = fastrand::f32() * 2.0 - 1.0;
        }
        let transition = env.step(&action)?;
        global_steps += 1;

        hud.observe(&env, tick);
        if transition.done {
            env.reset();
        }
    }

    tracing::info!(
        episodes = hud.episodes(),
        steps = global_steps,
        gravity = env.world().gravity_magnitude(),
        "balance loop finished"
    );
    Ok(())
}
