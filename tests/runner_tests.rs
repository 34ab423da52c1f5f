use bandit_strategies::action_selection::{EnumActionSelection, Greedy, UniformEpsilonGreed};
use bandit_strategies::env::{ActionSpace, Env, EnvError, Transition};
use bandit_strategies::runner::{EpisodeRunner, EpisodeStatus};
use bandit_strategies::BanditError;
use ndarray::arr1;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Pays a fixed reward per action; can be told to terminate, truncate or
/// fail on a given 0-based step.
struct FixedRewardEnv {
    rewards: Vec<f64>,
    terminate_on: Option<u128>,
    truncate_on: Option<u128>,
    fail_on: Option<u128>,
    close_fails: bool,
    steps: u128,
    resets: u32,
    closes: u32,
}

impl FixedRewardEnv {
    fn new(rewards: &[f64]) -> Self {
        Self {
            rewards: rewards.to_vec(),
            terminate_on: None,
            truncate_on: None,
            fail_on: None,
            close_fails: false,
            steps: 0,
            resets: 0,
            closes: 0,
        }
    }
}

impl Env<usize> for FixedRewardEnv {
    fn reset(&mut self) -> Result<usize, EnvError> {
        self.steps = 0;
        self.resets += 1;
        Ok(0)
    }

    fn step(&mut self, action: usize) -> Result<Transition<usize>, EnvError> {
        if self.fail_on == Some(self.steps) {
            return Err(EnvError::EnvNotReady);
        }
        if action >= self.rewards.len() {
            return Err(EnvError::InvalidAction(action));
        }
        let transition = Transition {
            observation: 0,
            reward: self.rewards[action],
            terminated: self.terminate_on == Some(self.steps),
            truncated: self.truncate_on == Some(self.steps),
        };
        self.steps += 1;
        Ok(transition)
    }

    fn action_space(&self) -> ActionSpace {
        ActionSpace::new(self.rewards.len())
    }

    fn render(&self) -> String {
        format!("step {}", self.steps)
    }

    fn close(&mut self) -> Result<(), EnvError> {
        self.closes += 1;
        if self.close_fails {
            return Err(EnvError::EnvNotReady);
        }
        Ok(())
    }
}

fn greedy() -> EnumActionSelection {
    Greedy::new().into()
}

#[test]
fn greedy_locks_onto_the_rewarding_action() {
    let mut env = FixedRewardEnv::new(&[1.0, 0.0]);
    let runner = EpisodeRunner::new(greedy(), 5);
    let mut rng = StdRng::seed_from_u64(0);

    let result = runner.run(&mut env, &mut rng).unwrap();
    assert_eq!(result.total_reward, 5.0);
    assert_eq!(result.q, arr1(&[1.0, 0.0]));
    assert_eq!(result.visits, arr1(&[5u64, 0]));
    assert_eq!(result.steps, 5);
    assert_eq!(result.status, EpisodeStatus::StepBudgetExhausted);
    assert_eq!(env.resets, 1);
    assert_eq!(env.closes, 1);
}

#[test]
fn termination_stops_the_loop() {
    let mut env = FixedRewardEnv::new(&[1.0, 0.0]);
    env.terminate_on = Some(3);
    let runner = EpisodeRunner::new(greedy(), 10);
    let mut rng = StdRng::seed_from_u64(0);

    let result = runner.run(&mut env, &mut rng).unwrap();
    // steps 0 through 3 ran, nothing after
    assert_eq!(result.steps, 4);
    assert_eq!(result.total_reward, 4.0);
    assert_eq!(result.status, EpisodeStatus::Terminated);
}

#[test]
fn truncation_is_reported() {
    let mut env = FixedRewardEnv::new(&[1.0, 0.0]);
    env.truncate_on = Some(2);
    let runner = EpisodeRunner::new(greedy(), 10);
    let mut rng = StdRng::seed_from_u64(0);

    let result = runner.run(&mut env, &mut rng).unwrap();
    assert_eq!(result.steps, 3);
    assert_eq!(result.status, EpisodeStatus::Truncated);
    assert_eq!(env.closes, 1);
}

#[test]
fn the_step_budget_bounds_the_episode() {
    let mut env = FixedRewardEnv::new(&[0.5, 0.5]);
    let runner = EpisodeRunner::new(greedy(), 7);
    let mut rng = StdRng::seed_from_u64(0);

    let result = runner.run(&mut env, &mut rng).unwrap();
    assert_eq!(result.steps, 7);
    assert_eq!(result.status, EpisodeStatus::StepBudgetExhausted);
}

#[test]
fn a_step_failure_is_propagated_after_closing() {
    let mut env = FixedRewardEnv::new(&[1.0, 0.0]);
    env.fail_on = Some(2);
    let runner = EpisodeRunner::new(greedy(), 10);
    let mut rng = StdRng::seed_from_u64(0);

    let err = runner.run(&mut env, &mut rng).unwrap_err();
    assert!(matches!(err, BanditError::EnvironmentFailure(_)));
    assert_eq!(env.closes, 1);
}

#[test]
fn a_close_failure_is_surfaced() {
    let mut env = FixedRewardEnv::new(&[1.0, 0.0]);
    env.close_fails = true;
    let runner = EpisodeRunner::new(greedy(), 3);
    let mut rng = StdRng::seed_from_u64(0);

    let err = runner.run(&mut env, &mut rng).unwrap_err();
    assert!(matches!(err, BanditError::EnvironmentFailure(_)));
}

#[test]
fn an_interrupt_stops_the_episode_and_closes_the_environment() {
    let mut env = FixedRewardEnv::new(&[1.0, 0.0]);
    let runner = EpisodeRunner::new(greedy(), 10);
    let mut rng = StdRng::seed_from_u64(0);

    let result = runner.run_until(&mut env, &mut rng, || true).unwrap();
    assert_eq!(result.steps, 0);
    assert_eq!(result.total_reward, 0.0);
    assert_eq!(result.status, EpisodeStatus::Truncated);
    assert_eq!(env.closes, 1);
}

#[test]
fn an_interrupt_can_fire_mid_episode() {
    let mut env = FixedRewardEnv::new(&[1.0, 0.0]);
    let runner = EpisodeRunner::new(greedy(), 10);
    let mut rng = StdRng::seed_from_u64(0);

    let mut polled = 0;
    let result = runner
        .run_until(&mut env, &mut rng, || {
            polled += 1;
            polled > 4
        })
        .unwrap();
    assert_eq!(result.steps, 4);
    assert_eq!(result.total_reward, 4.0);
    assert_eq!(result.status, EpisodeStatus::Truncated);
}

#[test]
fn exploration_still_observes_the_step_budget() {
    let mut env = FixedRewardEnv::new(&[0.0, 1.0, 0.0]);
    let selection: EnumActionSelection = UniformEpsilonGreed::new(0.3).unwrap().into();
    let runner = EpisodeRunner::new(selection, 50);
    let mut rng = StdRng::seed_from_u64(42);

    let result = runner.run(&mut env, &mut rng).unwrap();
    assert_eq!(result.steps, 50);
    assert_eq!(result.visits.sum(), 50);
    assert_eq!(result.status, EpisodeStatus::StepBudgetExhausted);
}
