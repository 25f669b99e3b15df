use anyhow::Result;
use depot_core::{DefaultEvaluator, Env, Evaluator, Policy};
use depot_env::{
    Action, DepotAct, DepotEnv, DepotEnvConfig, DepotEnvError, GreedyPolicy, Layout, Outcome, Pos,
    RandomPolicy,
};

const EPS: f32 = 1e-4;

fn corner_layout() -> DepotEnvConfig {
    DepotEnvConfig::default().layout(Layout::Fixed {
        agent: Pos::new(0, 0),
        pickup: Pos::new(0, 0),
        dest: Pos::new(4, 4),
    })
}

fn act(a: Action) -> DepotAct {
    a.into()
}

#[test]
fn test_pickup_and_destination_distinct_across_resets() -> Result<()> {
    let config = DepotEnvConfig::default();
    let mut env = DepotEnv::build(&config, 0)?;
    for seed in 0..200 {
        env.reset_with_seed(seed)?;
        let state = env.state();
        assert_ne!(state.pickup, state.dest);
        assert!(state.agent.row < 5 && state.agent.col < 5);
        assert!(state.pickup.row < 5 && state.pickup.col < 5);
        assert!(state.dest.row < 5 && state.dest.col < 5);
    }
    Ok(())
}

#[test]
fn test_agent_stays_in_bounds_under_random_actions() -> Result<()> {
    let config = DepotEnvConfig::default().max_steps(1000);
    let mut env = DepotEnv::build(&config, 3)?;
    let mut policy = RandomPolicy::new(3);
    let mut obs = env.reset()?;
    loop {
        let a = policy.sample(&obs);
        let (step, _) = env.step(&a)?;
        let state = env.state();
        assert!(state.agent.row < 5 && state.agent.col < 5);
        if step.is_done() {
            break;
        }
        obs = step.obs;
    }
    Ok(())
}

#[test]
fn test_step_count_strictly_increases() -> Result<()> {
    let mut env = DepotEnv::build(&corner_layout(), 0)?;
    env.reset()?;
    assert_eq!(env.state().step_count, 0);
    for i in 1..=10 {
        let (_, record) = env.step(&act(Action::Down))?;
        assert_eq!(env.state().step_count, i);
        assert_eq!(record.get_scalar("step_count")? as u32, i);
    }
    Ok(())
}

#[test]
fn test_pickup_scenario() -> Result<()> {
    let mut env = DepotEnv::build(&corner_layout(), 0)?;
    env.reset()?;
    assert!(!env.state().holding);
    let (step, _) = env.step(&act(Action::Pickup))?;
    assert!(env.state().holding);
    assert!((step.reward - (25.0 - 0.01)).abs() < EPS);
    assert!(!step.is_done());
    Ok(())
}

#[test]
fn test_illegal_pickup_is_a_noop() -> Result<()> {
    let config = DepotEnvConfig::default().layout(Layout::Fixed {
        agent: Pos::new(2, 2),
        pickup: Pos::new(0, 0),
        dest: Pos::new(4, 4),
    });
    let mut env = DepotEnv::build(&config, 0)?;
    env.reset()?;
    let before = env.state().clone();
    let (step, _) = env.step(&act(Action::Pickup))?;
    let after = env.state();
    assert_eq!(after.agent, before.agent);
    assert_eq!(after.holding, before.holding);
    assert_eq!(after.pickup, before.pickup);
    assert_eq!(after.dest, before.dest);
    assert_eq!(after.step_count, before.step_count + 1);
    assert!((step.reward - (-0.01)).abs() < EPS);
    Ok(())
}

#[test]
fn test_optimal_trajectory_reward_sum() -> Result<()> {
    // Pickup at (0, 0), destination at (4, 4), agent starting at (0, 0):
    // PICKUP, four moves down, four moves right, DROP.
    let mut env = DepotEnv::build(&corner_layout(), 0)?;
    env.reset()?;

    let trajectory = [
        Action::Pickup,
        Action::Down,
        Action::Down,
        Action::Down,
        Action::Down,
        Action::Right,
        Action::Right,
        Action::Right,
        Action::Right,
        Action::Drop,
    ];

    let mut total = 0f32;
    let mut done = false;
    for a in trajectory.iter() {
        assert!(!done, "episode ended before the trajectory finished");
        let (step, _) = env.step(&act(*a))?;
        total += step.reward;
        done = step.is_done();
    }
    assert!(done);

    // 25 (pickup) + 200 (delivery) + 0.5 * k - 0.01 * n, with k = 8
    // distance-reducing moves and n = 10 steps.
    let expected = 25.0 + 200.0 + 0.5 * 8.0 - 0.01 * 10.0;
    assert!((total - expected).abs() < 1e-3);
    Ok(())
}

#[test]
fn test_delivery_terminates_with_success() -> Result<()> {
    let config = DepotEnvConfig::default().layout(Layout::Fixed {
        agent: Pos::new(4, 3),
        pickup: Pos::new(4, 3),
        dest: Pos::new(4, 4),
    });
    let mut env = DepotEnv::build(&config, 0)?;
    env.reset()?;
    env.step(&act(Action::Pickup))?;
    let (step, _) = env.step(&act(Action::Right))?;
    assert!(!step.is_done());
    let (step, record) = env.step(&act(Action::Drop))?;
    assert!(step.is_terminated);
    assert!(!step.is_truncated);
    assert_eq!(step.info.outcome, Some(Outcome::Delivered));
    assert_eq!(record.get_string("outcome")?, "delivered");
    assert!(env.state().delivered);
    assert!((step.reward - (200.0 - 0.01)).abs() < EPS);
    Ok(())
}

#[test]
fn test_wrong_drop_loses_item_and_continues() -> Result<()> {
    let mut env = DepotEnv::build(&corner_layout(), 0)?;
    env.reset()?;
    env.step(&act(Action::Pickup))?;
    env.step(&act(Action::Down))?;

    let (step, _) = env.step(&act(Action::Drop))?;
    assert!((step.reward - (-5.0 - 0.01)).abs() < EPS);
    assert!(!step.is_done());
    let state = env.state();
    assert!(!state.holding);
    assert!(!state.delivered);
    assert!(state.item_lost);

    // Back at the pickup cell the item cannot be re-acquired.
    env.step(&act(Action::Up))?;
    let (step, _) = env.step(&act(Action::Pickup))?;
    assert!(!env.state().holding);
    assert!((step.reward - (-0.01)).abs() < EPS);
    Ok(())
}

#[test]
fn test_timeout_terminates_with_truncation() -> Result<()> {
    let config = DepotEnvConfig::default()
        .max_steps(5)
        .layout(Layout::Fixed {
            agent: Pos::new(0, 0),
            pickup: Pos::new(0, 1),
            dest: Pos::new(4, 4),
        });
    let mut env = DepotEnv::build(&config, 0)?;
    env.reset()?;

    for _ in 0..4 {
        let (step, _) = env.step(&act(Action::Up))?;
        assert!(!step.is_done());
    }
    let (step, record) = env.step(&act(Action::Up))?;
    assert!(step.is_truncated);
    assert!(!step.is_terminated);
    assert_eq!(step.info.outcome, Some(Outcome::TimedOut));
    assert_eq!(record.get_string("outcome")?, "timeout");
    Ok(())
}

#[test]
fn test_step_after_done_fails() -> Result<()> {
    let config = DepotEnvConfig::default().max_steps(1);
    let mut env = DepotEnv::build(&config, 0)?;
    env.reset()?;
    let (step, _) = env.step(&act(Action::Up))?;
    assert!(step.is_done());

    let err = env.step(&act(Action::Up)).unwrap_err();
    match err.downcast_ref::<DepotEnvError>() {
        Some(DepotEnvError::InvalidAction(_)) => {}
        other => panic!("unexpected error: {:?}", other),
    }

    // A reset makes the environment steppable again.
    env.reset()?;
    env.step(&act(Action::Up))?;
    Ok(())
}

#[test]
fn test_out_of_range_action_fails() -> Result<()> {
    let mut env = DepotEnv::build(&DepotEnvConfig::default(), 0)?;
    env.reset()?;
    let err = env.step(&DepotAct::new(6)).unwrap_err();
    match err.downcast_ref::<DepotEnvError>() {
        Some(DepotEnvError::InvalidAction(_)) => {}
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_invalid_configuration_rejected_at_build() {
    assert!(DepotEnv::build(&DepotEnvConfig::default().grid_size(1), 0).is_err());
    assert!(DepotEnv::build(&DepotEnvConfig::default().max_steps(0), 0).is_err());
    let bad_layout = DepotEnvConfig::default().layout(Layout::Fixed {
        agent: Pos::new(0, 0),
        pickup: Pos::new(2, 2),
        dest: Pos::new(2, 2),
    });
    assert!(DepotEnv::build(&bad_layout, 0).is_err());
}

#[test]
fn test_observation_is_reproducible_and_stable() -> Result<()> {
    let config = DepotEnvConfig::default();
    let mut env = DepotEnv::build(&config, 0)?;
    let a = env.reset_with_seed(7)?;
    let b = env.reset_with_seed(7)?;
    assert_eq!(a.as_slice(), b.as_slice());

    let spec = env.obs_spec();
    assert_eq!(spec.dim, depot_env::OBS_DIM);
    for x in a.as_slice() {
        assert!(*x >= spec.low && *x <= spec.high);
    }
    assert_eq!(env.act_spec().n, Action::COUNT);
    Ok(())
}

#[test]
fn test_greedy_policy_delivers() -> Result<()> {
    let config = DepotEnvConfig::default();
    let mut evaluator = DefaultEvaluator::<DepotEnv>::new(&config, 0, 10)?;
    let record = evaluator.evaluate(&mut GreedyPolicy)?;
    // Every episode ends in a delivery, so the mean return clears the
    // delivery bonus comfortably.
    assert!(record.get_scalar("Episode return")? > 200.0);
    Ok(())
}
