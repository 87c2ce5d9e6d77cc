mod common;

use common::ScriptedAnt;
use physics::{HeightField, SimError, Vec3};
use rl::{Env, Formicarium, FormicariumConfig, ResetOptions};
use terrain::{HeightMap, TerrainError};

fn scripted(ant: ScriptedAnt) -> Formicarium<ScriptedAnt> {
    Formicarium::new(ant, FormicariumConfig::default()).unwrap()
}

#[test]
fn seeded_reset_is_deterministic() {
    let mut env = scripted(ScriptedAnt::new());
    env.reset(Some(42), ResetOptions::default()).unwrap();
    let first = env.sim().terrain().clone();
    env.reset(Some(42), ResetOptions::default()).unwrap();
    assert_eq!(env.sim().terrain(), &first);
}

#[test]
fn unseeded_reset_draws_new_terrain() {
    let mut env = scripted(ScriptedAnt::new());
    env.reset(Some(42), ResetOptions::default()).unwrap();
    let first = env.sim().terrain().clone();
    env.reset(None, ResetOptions::default()).unwrap();
    assert_ne!(env.sim().terrain(), &first);
}

#[test]
fn terrain_shape_is_fixed() {
    let mut env = scripted(ScriptedAnt::new());
    for seed in [0, 1, 42, 999_999] {
        env.reset(Some(seed), ResetOptions::default()).unwrap();
        assert_eq!(env.sim().terrain().shape(), (50, 1000));
    }
}

#[test]
fn reset_returns_observation_and_empty_info() {
    let mut env = scripted(ScriptedAnt::at(Vec3::new(3.0, 1.0, 0.5)));
    let (obs, info) = env.reset(Some(1), ResetOptions::default()).unwrap();
    assert!(info.is_empty());
    assert_eq!(obs.pos, Vec3::new(3.0, 1.0, 0.5));
    assert_eq!(obs.pose, vec![0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 20.0, 21.0]);
    assert_eq!(env.sim().resets, 1);
}

#[test]
fn reset_accepts_supplied_terrain() {
    let mut env = scripted(ScriptedAnt::new());
    let flat = HeightMap::zeros(50, 1000).unwrap();
    env.reset(Some(3), ResetOptions { terrain: Some(flat.clone()) }).unwrap();
    assert_eq!(env.sim().terrain(), &flat);
}

#[test]
fn supplied_terrain_must_match_the_arena_shape() {
    let mut env = scripted(ScriptedAnt::new());
    env.reset(Some(3), ResetOptions::default()).unwrap();
    let before = env.sim().terrain().clone();

    let err = env
        .reset(Some(3), ResetOptions { terrain: Some(HeightMap::zeros(3, 3).unwrap()) })
        .unwrap_err();
    assert_eq!(
        err,
        SimError::Terrain(TerrainError::ShapeMismatch { expected: (50, 1000), got: (3, 3) })
    );
    assert_eq!(env.sim().terrain(), &before);
    assert_eq!(env.sim().resets, 1);
}

#[test]
fn spaces_are_derived_from_the_agent_and_stay_fixed() {
    let mut env = scripted(ScriptedAnt::new());
    assert_eq!(env.action_space().shape(), &[ScriptedAnt::ACTION_LEN]);
    assert_eq!(env.observation_space().shape(), &[ScriptedAnt::OBS_LEN]);

    env.reset(Some(0), ResetOptions::default()).unwrap();
    for _ in 0..3 {
        let step = env.step(&[0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(step.obs.pose.len(), env.observation_space().len());
    }
    assert_eq!(env.action_space().shape(), &[ScriptedAnt::ACTION_LEN]);
    assert_eq!(env.observation_space().shape(), &[ScriptedAnt::OBS_LEN]);
}

#[test]
fn step_applies_action_as_force() {
    let mut env = scripted(ScriptedAnt::new());
    env.reset(Some(0), ResetOptions::default()).unwrap();
    env.step(&[1.0, -1.0, 0.5, 0.0]).unwrap();
    assert_eq!(env.sim().force, vec![1.0, -1.0, 0.5, 0.0]);
}

#[test]
fn goal_line_terminates_with_bonus() {
    let mut env = scripted(ScriptedAnt::at(Vec3::new(50.0, 1.0, 0.0)));
    env.reset(Some(0), ResetOptions::default()).unwrap();
    let step = env.step(&[0.0; 4]).unwrap();
    assert!(step.terminated);
    assert!(!step.truncated);
    assert_eq!(step.info.term, 10.0);
}

#[test]
fn falling_through_truncates() {
    let mut env = scripted(ScriptedAnt::at(Vec3::new(5.0, 1.0, -20.0)));
    env.reset(Some(0), ResetOptions::default()).unwrap();
    let step = env.step(&[0.0; 4]).unwrap();
    assert!(step.truncated);
    assert!(!step.terminated);
    assert_eq!(step.info.term, 0.0);
}

#[test]
fn termination_and_truncation_are_independent() {
    let cases = [
        (Vec3::new(0.0, 0.0, 0.0), false, false),
        (Vec3::new(50.0, 0.0, 0.0), true, false),
        (Vec3::new(0.0, 0.0, -20.0), false, true),
        (Vec3::new(50.0, 0.0, -20.0), true, true),
        // both thresholds are strict
        (Vec3::new(45.0, 0.0, -10.0), false, false),
    ];
    for (pos, terminated, truncated) in cases {
        let mut env = scripted(ScriptedAnt::at(pos));
        env.reset(Some(0), ResetOptions::default()).unwrap();
        let step = env.step(&[0.0; 4]).unwrap();
        assert_eq!(step.terminated, terminated, "pos={pos:?}");
        assert_eq!(step.truncated, truncated, "pos={pos:?}");
        assert_eq!(step.done(), terminated || truncated);
    }
}

#[test]
fn flags_use_the_post_step_state() {
    let mut ant = ScriptedAnt::at(Vec3::new(44.0, 0.0, 0.0));
    ant.drift = Vec3::new(0.5, 0.0, 0.0);
    let config = FormicariumConfig { skip_frames: 3, ..FormicariumConfig::default() };
    let mut env = Formicarium::new(ant, config).unwrap();
    env.reset(Some(0), ResetOptions::default()).unwrap();
    let step = env.step(&[0.0; 4]).unwrap();
    assert_eq!(step.obs.pos.x, 45.5);
    assert!(step.terminated);
}

#[test]
fn reward_decomposes_exactly() {
    let mut ant = ScriptedAnt::at(Vec3::new(50.0, 0.0, 0.0));
    ant.x_vel = 1.37;
    let mut env = scripted(ant);
    env.reset(Some(7), ResetOptions::default()).unwrap();
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..50 {
        let action = env.action_space().sample(&mut rng);
        let step = env.step(&action).unwrap();
        assert_eq!(step.reward, step.info.vel + step.info.term - step.info.cost);
        let norm = action.iter().map(|a| a * a).sum::<f32>().sqrt();
        assert!((step.info.cost - 0.5 * norm).abs() < 1e-5);
        assert_eq!(step.info.vel, 1.37);
    }
}

#[test]
fn zero_action_costs_nothing() {
    let mut ant = ScriptedAnt::at(Vec3::new(10.0, 1.0, 0.0));
    ant.x_vel = 0.25;
    let mut env = scripted(ant);
    env.reset(Some(42), ResetOptions::default()).unwrap();
    let step = env.step(&[0.0; 4]).unwrap();
    assert_eq!(step.info.cost, 0.0);
    assert_eq!(step.info.term, 0.0);
    assert_eq!(step.reward, step.info.vel);
    assert_eq!(step.reward, 0.25);
}

#[test]
fn skip_frames_sets_substeps_per_step() {
    let config = FormicariumConfig::with_skip_frames(Some(5));
    let mut env = Formicarium::new(ScriptedAnt::new(), config).unwrap();
    env.reset(Some(0), ResetOptions::default()).unwrap();
    env.step(&[0.0; 4]).unwrap();
    assert_eq!(env.sim().world_steps, 5);
    assert_eq!(env.sim().step_calls, 1);
    env.step(&[0.0; 4]).unwrap();
    assert_eq!(env.sim().world_steps, 10);
}

#[test]
fn skip_frames_defaults_to_one() {
    let config = FormicariumConfig::with_skip_frames(None);
    let mut env = Formicarium::new(ScriptedAnt::new(), config).unwrap();
    assert_eq!(env.skip_frames(), 1);
    env.reset(Some(0), ResetOptions::default()).unwrap();
    env.step(&[0.0; 4]).unwrap();
    assert_eq!(env.sim().world_steps, 1);
}

#[test]
fn render_passes_the_camera_through() {
    let env = scripted(ScriptedAnt::new());
    let frame = env.render();
    assert_eq!((frame.width, frame.height), (2, 2));
    assert_eq!(frame.pixel(0, 0), Some([255, 0, 0]));
}

#[test]
fn simulator_errors_propagate_unchanged() {
    let mut ant = ScriptedAnt::new();
    ant.built = false;
    let mut env = scripted(ant);
    assert_eq!(
        env.reset(Some(0), ResetOptions::default()).unwrap_err(),
        SimError::NotBuilt
    );

    let mut env = scripted(ScriptedAnt::new());
    env.reset(Some(0), ResetOptions::default()).unwrap();
    assert_eq!(
        env.step(&[1.0]).unwrap_err(),
        SimError::ForceLength { expected: 4, got: 1 }
    );
}

#[test]
fn stepping_after_terminal_is_not_policed() {
    let mut env = scripted(ScriptedAnt::at(Vec3::new(50.0, 0.0, 0.0)));
    env.reset(Some(0), ResetOptions::default()).unwrap();
    assert!(env.step(&[0.0; 4]).unwrap().terminated);
    assert!(env.step(&[0.0; 4]).unwrap().terminated);
}

#[test]
fn close_is_a_no_op() {
    let mut env = scripted(ScriptedAnt::new());
    env.close().unwrap();
}
