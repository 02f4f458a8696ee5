use agent::{
    ActionLimit, BalanceEnv, ControlParams, Env, EnvError, MemorySink, NullSink, RewardParams,
    StatsSink, UPRIGHT_STAT,
};
use sim::{transform, Humanoid, Integrator, Vec3, World, IDENTITY_ROTATION};
use std::cell::RefCell;
use std::rc::Rc;

/// Leaves the world untouched; the rig stays perfectly upright forever.
struct Frozen;

impl Integrator for Frozen {
    fn advance(&mut self, _world: &mut World) {}
}

/// Replays a scripted sequence of balance metrics by setting the root
/// orientation to the matching lean angle each step, then holds the last.
struct Scripted {
    balances: Vec<f32>,
    cursor: usize,
}

impl Scripted {
    fn new(balances: Vec<f32>) -> Self {
        Self { balances, cursor: 0 }
    }
}

impl Integrator for Scripted {
    fn advance(&mut self, world: &mut World) {
        let balance = self.balances[self.cursor.min(self.balances.len() - 1)];
        self.cursor += 1;
        let angle = balance.clamp(-1.0, 1.0).acos();
        let half = angle * 0.5;
        world.humanoid.root.orientation = [0.0, 0.0, half.sin(), half.cos()];
    }
}

/// Shares a [`MemorySink`] between the test and the environment.
#[derive(Clone)]
struct SharedSink(Rc<RefCell<MemorySink>>);

impl StatsSink for SharedSink {
    fn add(&mut self, key: &str, value: f32) {
        self.0.borrow_mut().add(key, value);
    }
}

fn world_with_joints(n: usize) -> World {
    let rig = Humanoid::new(
        Vec3::new(0.0, 0.79, 0.0),
        IDENTITY_ROTATION,
        vec![IDENTITY_ROTATION; n],
    )
    .unwrap();
    World::new(rig)
}

fn frozen_env(n: usize) -> BalanceEnv<Frozen> {
    BalanceEnv::new(
        world_with_joints(n),
        Frozen,
        ControlParams::default(),
        RewardParams::default(),
        Box::new(NullSink),
    )
}

#[test]
fn observation_layout_and_length() {
    let mut env = frozen_env(13);
    assert_eq!(env.obs_size(), 35);
    assert_eq!(env.action_size(), 13);

    let obs = env.reset();
    assert_eq!(obs.len(), 35);
    // Upright at rest: up = +Y, forward = +Z, zero angular velocity,
    // all joints at zero position and velocity.
    assert_eq!(&obs[0..3], &[0.0, 1.0, 0.0]);
    assert_eq!(&obs[3..6], &[0.0, 0.0, 1.0]);
    assert_eq!(&obs[6..9], &[0.0, 0.0, 0.0]);
    assert!(obs[9..].iter().all(|&v| v == 0.0));

    let t = env.step(&vec![0.0; 13]).unwrap();
    assert_eq!(t.obs.len(), 35);
}

#[test]
fn actions_scale_to_drive_targets() {
    let mut env = frozen_env(2);
    env.step(&[0.5, -0.3]).unwrap();
    let joints = &env.world().humanoid.joints;
    assert!((joints[0].drive_target - 5.0).abs() < 1e-6);
    assert!((joints[1].drive_target + 3.0).abs() < 1e-6);
}

#[test]
fn out_of_range_actions_pass_through_by_default() {
    let mut env = frozen_env(1);
    env.step(&[2.0]).unwrap();
    assert!((env.world().humanoid.joints[0].drive_target - 20.0).abs() < 1e-6);
}

#[test]
fn clamp_policy_limits_actions_to_unit_range() {
    let control = ControlParams {
        action_limit: ActionLimit::Clamp,
        ..ControlParams::default()
    };
    let mut env = BalanceEnv::new(
        world_with_joints(1),
        Frozen,
        control,
        RewardParams::default(),
        Box::new(NullSink),
    );
    env.step(&[2.0]).unwrap();
    assert!((env.world().humanoid.joints[0].drive_target - 10.0).abs() < 1e-6);
}

#[test]
fn wrong_action_length_leaves_episode_untouched() {
    let mut env = frozen_env(3);
    env.reset();
    env.step(&[0.1, 0.1, 0.1]).unwrap();
    let steps_before = env.steps();
    let balance_before = env.balance();

    let err = env.step(&[0.1, 0.1]).unwrap_err();
    assert_eq!(
        err,
        EnvError::ActionSize {
            got: 2,
            expected: 3
        }
    );
    assert_eq!(env.steps(), steps_before);
    assert_eq!(env.balance(), balance_before);
    assert_eq!(env.world().humanoid.joints[0].drive_target, 1.0);
}

#[test]
fn alive_bonus_only_while_upright() {
    let mut env = BalanceEnv::new(
        world_with_joints(2),
        Scripted::new(vec![0.97]),
        ControlParams::default(),
        RewardParams::default(),
        Box::new(NullSink),
    );
    // Balance drops to 0.97: above the punish threshold, so the wobble is
    // tolerated even though it is worsening.
    let t = env.step(&[0.0, 0.0]).unwrap();
    assert!((t.reward - 0.005).abs() < 1e-7);
    assert!(!t.done);
}

#[test]
fn worsening_while_compromised_is_penalized() {
    let mut env = BalanceEnv::new(
        world_with_joints(2),
        Scripted::new(vec![0.9, 0.85]),
        ControlParams::default(),
        RewardParams::default(),
        Box::new(NullSink),
    );
    env.step(&[0.0, 0.0]).unwrap();
    // Previous balance 0.9, new 0.85: below 0.95 and still deteriorating.
    let t = env.step(&[0.0, 0.0]).unwrap();
    assert!((t.reward - (0.005 - 0.05)).abs() < 1e-7);
    assert!(!t.done);
}

#[test]
fn falling_past_threshold_terminates_with_override() {
    let mut env = BalanceEnv::new(
        world_with_joints(2),
        Scripted::new(vec![0.82, 0.79]),
        ControlParams::default(),
        RewardParams::default(),
        Box::new(NullSink),
    );
    env.step(&[0.0, 0.0]).unwrap();
    let t = env.step(&[0.0, 0.0]).unwrap();
    assert_eq!(t.reward, -1.0);
    assert!(t.done);
    assert!(!env.is_active());

    // Terminated episodes refuse further steps until reset.
    assert_eq!(env.step(&[0.0, 0.0]).unwrap_err(), EnvError::EpisodeOver);

    let obs = env.reset();
    assert_eq!(env.steps(), 0);
    assert!(env.is_active());
    assert!((env.balance() - 1.0).abs() < 1e-6);
    assert_eq!(obs.len(), env.obs_size());
    env.step(&[0.0, 0.0]).unwrap();
}

#[test]
fn cumulative_reward_tracks_episode() {
    let mut env = BalanceEnv::new(
        world_with_joints(1),
        Frozen,
        ControlParams::default(),
        RewardParams::default(),
        Box::new(NullSink),
    );
    for _ in 0..4 {
        env.step(&[0.0]).unwrap();
    }
    assert!((env.cumulative_reward() - 0.02).abs() < 1e-6);
    assert_eq!(env.steps(), 4);
    env.reset();
    assert_eq!(env.cumulative_reward(), 0.0);
}

#[test]
fn balance_metric_is_recorded_every_step() {
    let sink = SharedSink(Rc::new(RefCell::new(MemorySink::new())));
    let mut env = BalanceEnv::new(
        world_with_joints(2),
        Scripted::new(vec![0.99, 0.97]),
        ControlParams::default(),
        RewardParams::default(),
        Box::new(sink.clone()),
    );
    env.step(&[0.0, 0.0]).unwrap();
    env.step(&[0.0, 0.0]).unwrap();

    let inner = sink.0.borrow();
    let samples = inner.samples();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].0, UPRIGHT_STAT);
    assert!((samples[0].1 - 0.99).abs() < 1e-4);
    assert!((samples[1].1 - 0.97).abs() < 1e-4);
}

#[test]
fn scripted_lean_matches_transform_math() {
    // Sanity-check the test harness itself: a scripted balance of 0.9
    // really does put the root's up axis at acos(0.9) from vertical.
    let mut world = world_with_joints(1);
    Scripted::new(vec![0.9]).advance(&mut world);
    let up = transform::up_vector(world.humanoid.root.orientation);
    assert!((up.dot(Vec3::UP) - 0.9).abs() < 1e-5);
}
