use agent::{CurriculumStage, GravityCurriculum, DEFAULT_GRAVITY};
use sim::{Humanoid, Vec3, World, IDENTITY_ROTATION};

fn stage(name: &str, activate_at: u64, gravity: f32) -> CurriculumStage {
    CurriculumStage {
        name: name.to_owned(),
        activate_at,
        gravity,
    }
}

fn reference_stages() -> Vec<CurriculumStage> {
    vec![
        stage("full", 0, 9.81),
        stage("half", 1000, 5.0),
        stage("fifth", 5000, 2.0),
    ]
}

fn test_world() -> World {
    let rig = Humanoid::new(
        Vec3::new(0.0, 0.8, 0.0),
        IDENTITY_ROTATION,
        vec![IDENTITY_ROTATION; 2],
    )
    .unwrap();
    World::new(rig)
}

#[test]
fn selects_last_reached_stage() {
    let c = GravityCurriculum::new(reference_stages());
    assert!((c.target_for(999) - 9.81).abs() < 1e-6);
    assert!((c.target_for(1500) - 5.0).abs() < 1e-6);
    assert!((c.target_for(5000) - 2.0).abs() < 1e-6);
    assert!((c.target_for(1_000_000) - 2.0).abs() < 1e-6);
}

#[test]
fn sorts_misordered_stage_tables() {
    let mut stages = reference_stages();
    stages.reverse();
    let c = GravityCurriculum::new(stages);
    assert!((c.target_for(999) - 9.81).abs() < 1e-6);
    assert!((c.target_for(1500) - 5.0).abs() < 1e-6);
}

#[test]
fn empty_table_falls_back_to_default() {
    let c = GravityCurriculum::new(Vec::new());
    assert!((c.target_for(0) - DEFAULT_GRAVITY).abs() < 1e-6);
    assert!((c.target_for(u64::MAX) - DEFAULT_GRAVITY).abs() < 1e-6);
}

#[test]
fn value_is_constant_between_thresholds() {
    let c = GravityCurriculum::new(reference_stages());
    for progress in 1000..1100 {
        assert!((c.target_for(progress) - 5.0).abs() < 1e-6);
    }
}

#[test]
fn selected_value_follows_stage_order() {
    // As progress grows, the selected stage index never moves backwards.
    let c = GravityCurriculum::new(reference_stages());
    let mut last = c.target_for(0);
    for progress in (0..10_000).step_by(250) {
        let value = c.target_for(progress);
        let expected_rank = |g: f32| {
            if (g - 9.81).abs() < 1e-6 {
                0
            } else if (g - 5.0).abs() < 1e-6 {
                1
            } else {
                2
            }
        };
        assert!(expected_rank(value) >= expected_rank(last));
        last = value;
    }
}

#[test]
fn writes_only_on_change() {
    let mut c = GravityCurriculum::new(reference_stages());
    let mut world = test_world();

    // Stage zero prescribes the default, already in effect.
    assert!(!c.update(&mut world, 0));
    assert!((world.gravity_magnitude() - 9.81).abs() < 1e-6);

    assert!(c.update(&mut world, 1000));
    assert!((world.gravity_magnitude() - 5.0).abs() < 1e-6);

    // Same progress again: idempotent, no second write.
    assert!(!c.update(&mut world, 1000));
    assert!(!c.update(&mut world, 1001));
    assert!((c.applied() - 5.0).abs() < 1e-6);
}

#[test]
fn startup_evaluation_applies_an_initial_stage() {
    let mut c = GravityCurriculum::new(vec![stage("easy", 0, 4.9)]);
    let mut world = test_world();
    assert!(c.update(&mut world, 0));
    assert!((world.gravity_magnitude() - 4.9).abs() < 1e-6);
}

#[test]
fn scheduler_outlives_episode_resets() {
    let mut c = GravityCurriculum::new(reference_stages());
    let mut world = test_world();
    c.update(&mut world, 2000);
    world.humanoid.reset();
    assert!(!c.update(&mut world, 2000));
    assert!((world.gravity_magnitude() - 5.0).abs() < 1e-6);
}
